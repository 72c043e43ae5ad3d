//! # Particle Engine
//!
//! A GPU-ready 2D touch particle effect engine built with Rust.
//!
//! ## Features
//!
//! - **Frame-Driven Lifecycle**: Spawn, age, prune and mesh generation executed
//!   once per simulation step, in a fixed order
//! - **Quad Mesh Output**: One textured quadrangle per live particle, ready for
//!   GPU upload (`bytemuck` Pod layout, wgpu vertex descriptor)
//! - **Math Primitives**: Row-major 4x4 matrix with pixel-space, rotation and
//!   perspective constructors, plus fixed-size float vectors
//! - **Configuration**: TOML/JSON configuration with validation
//! - **Observability**: Structured logging via `tracing`
//!
//! ## Architecture Design
//!
//! The engine is single-threaded and synchronous. Each step:
//!
//! 1. **Spawn**: append one particle (life = 1.0) per spawn request
//! 2. **Age**: decrement every particle's life by a fixed per-step rate,
//!    clamped at 0.0
//! 3. **Prune**: drop particles whose life reached 0.0, preserving order
//! 4. **Mesh**: regenerate the quad mesh from the surviving particles
//!    (skipped while the store is empty)
//!
//! The resulting vertex buffer and the pixel projection matrix are handed to
//! an external render adapter only after the step completes.
//!
//! ### Example
//!
//! ```
//! use particle_engine::config::EffectConfig;
//! use particle_engine::core::Engine;
//! use particle_engine::math::Vec2;
//! use particle_engine::particles::{Rgba, SpawnRequest};
//!
//! let mut engine = Engine::new(EffectConfig::default()).unwrap();
//! let touch = SpawnRequest::new(Vec2::new(240.0, 320.0), Rgba::new(1.0, 0.5, 0.2, 1.0), 120.0);
//! engine.update(&[touch]);
//! assert_eq!(engine.mesh().quad_count(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Engine entry point, frame orchestration and error types
//! - [`math`]: Vector and matrix primitives
//! - [`particles`]: Particle store and lifecycle operations
//! - [`render`]: Quad mesh generation and GPU buffer surface
//! - [`config`]: Configuration system

/// Engine entry point, frame orchestration and error types
pub mod core;
/// Vector and matrix primitives
pub mod math;
/// Particle store and lifecycle operations
pub mod particles;
/// Quad mesh generation and GPU buffer surface
pub mod render;
/// Configuration system
pub mod config;
