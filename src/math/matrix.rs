//! 行主序4x4矩阵
//!
//! 矩阵由四个行向量组成，变换采用行向量左乘约定：`v' = v * M`。
//! 投影构造器对退化输入（零尺寸、near == far）显式返回错误，
//! 不会静默传播NaN/Inf。

use std::ops::Mul;

use thiserror::Error;

use super::vec::{Vec3, Vec4};

/// 数学运算错误
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("Pixel projection requires a non-zero extent: {width}x{height}")]
    ZeroProjectionExtent { width: f32, height: f32 },

    #[error("Perspective projection requires far != near (near: {near}, far: {far})")]
    DegeneratePerspective { near: f32, far: f32 },

    #[error("Perspective projection requires a non-zero aspect ratio")]
    ZeroAspect,
}

pub type MathResult<T> = Result<T, MathError>;

/// 行主序4x4变换矩阵
///
/// 任意16个浮点数都是合法矩阵，不强制任何不变量。
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Matrix4x4 {
    pub x: Vec4,
    pub y: Vec4,
    pub z: Vec4,
    pub w: Vec4,
}

impl Matrix4x4 {
    /// 单位矩阵
    pub const IDENTITY: Matrix4x4 = Matrix4x4 {
        x: Vec4::new(1.0, 0.0, 0.0, 0.0),
        y: Vec4::new(0.0, 1.0, 0.0, 0.0),
        z: Vec4::new(0.0, 0.0, 1.0, 0.0),
        w: Vec4::new(0.0, 0.0, 0.0, 1.0),
    };

    /// 单位矩阵
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub const fn to_rows_array_2d(self) -> [[f32; 4]; 4] {
        [
            self.x.to_array(),
            self.y.to_array(),
            self.z.to_array(),
            self.w.to_array(),
        ]
    }

    pub const fn from_rows_array_2d(rows: [[f32; 4]; 4]) -> Self {
        Self {
            x: Vec4::from_array(rows[0]),
            y: Vec4::from_array(rows[1]),
            z: Vec4::from_array(rows[2]),
            w: Vec4::from_array(rows[3]),
        }
    }

    /// 像素坐标系变换矩阵
    ///
    /// 将像素空间（原点左上、y向下）映射到标准化设备坐标
    /// （原点居中、y向上、范围[-1,1]）。
    ///
    /// # 错误
    ///
    /// 宽或高为0时返回[`MathError::ZeroProjectionExtent`]。
    pub fn pixel_projection(width: f32, height: f32) -> MathResult<Self> {
        if width == 0.0 || height == 0.0 {
            return Err(MathError::ZeroProjectionExtent { width, height });
        }

        let mut mat = Matrix4x4::identity();
        mat.x.x = 2.0 / width;
        mat.y.y = -2.0 / height;
        mat.w.x = -1.0;
        mat.w.y = 1.0;
        Ok(mat)
    }

    /// 绕任意轴的旋转矩阵（Rodrigues公式）
    ///
    /// 前置条件：`axis`必须已归一化，本函数不做归一化；
    /// 传入非单位向量会得到非正交的错误旋转。
    pub fn rotation_about_axis(axis: Vec3, angle_radians: f32) -> Self {
        let c = angle_radians.cos();
        let s = angle_radians.sin();

        let mut mat = Matrix4x4::identity();

        mat.x.x = axis.x * axis.x + (1.0 - axis.x * axis.x) * c;
        mat.x.y = axis.x * axis.y * (1.0 - c) - axis.z * s;
        mat.x.z = axis.x * axis.z * (1.0 - c) + axis.y * s;

        mat.y.x = axis.x * axis.y * (1.0 - c) + axis.z * s;
        mat.y.y = axis.y * axis.y + (1.0 - axis.y * axis.y) * c;
        mat.y.z = axis.y * axis.z * (1.0 - c) - axis.x * s;

        mat.z.x = axis.x * axis.z * (1.0 - c) - axis.y * s;
        mat.z.y = axis.y * axis.z * (1.0 - c) + axis.x * s;
        mat.z.z = axis.z * axis.z + (1.0 - axis.z * axis.z) * c;

        mat
    }

    /// 透视投影矩阵（右手坐标系）
    ///
    /// # 错误
    ///
    /// `far == near`时返回[`MathError::DegeneratePerspective`]，
    /// `aspect == 0`时返回[`MathError::ZeroAspect`]。
    pub fn perspective_projection(
        aspect: f32,
        field_of_view_y_degrees: f32,
        near: f32,
        far: f32,
    ) -> MathResult<Self> {
        if far - near == 0.0 {
            return Err(MathError::DegeneratePerspective { near, far });
        }
        if aspect == 0.0 {
            return Err(MathError::ZeroAspect);
        }

        let fov_radians = field_of_view_y_degrees * (std::f32::consts::PI / 180.0);

        let y_scale = 1.0 / (fov_radians * 0.5).tan();
        let x_scale = y_scale / aspect;
        let z_range = far - near;
        let z_scale = -(far + near) / z_range;
        let wz_scale = -2.0 * far * near / z_range;

        let mut mat = Matrix4x4::identity();
        mat.x.x = x_scale;
        mat.y.y = y_scale;
        mat.z.z = z_scale;
        mat.z.w = -1.0;
        mat.w.z = wz_scale;
        mat.w.w = 0.0;
        Ok(mat)
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, rhs: Matrix4x4) -> Matrix4x4 {
        let a = self.to_rows_array_2d();
        let b = rhs.to_rows_array_2d();
        let mut out = [[0.0f32; 4]; 4];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += a[r][k] * b[k][c];
                }
                *cell = sum;
            }
        }
        Matrix4x4::from_rows_array_2d(out)
    }
}

// 行向量左乘: v' = v * M
impl Mul<Matrix4x4> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: Matrix4x4) -> Vec4 {
        let v = self.to_array();
        let m = rhs.to_rows_array_2d();
        let mut out = [0.0f32; 4];
        for (c, cell) in out.iter_mut().enumerate() {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += v[k] * m[k][c];
            }
            *cell = sum;
        }
        Vec4::from_array(out)
    }
}
