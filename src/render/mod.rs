pub mod gpu;
pub mod quad;
pub mod vertex;

// Re-export mesh components for convenience
pub use gpu::{GpuQuadBuffer, ProjectionUniform};
pub use quad::{Quad, QuadMesh, QUAD_INDICES};
pub use vertex::VertexInfo;
