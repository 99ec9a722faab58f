use softpipe_math::{DMat4, Point3, Transform, Vector3};

/// What the renderer needs from a camera.
///
/// Each frame the renderer calls [`update_projection_matrix`] and
/// [`update_matrix_world`], then inverts `matrix_world` into a separate
/// matrix and hands it back through [`set_matrix_world_inverse`].
///
/// [`update_projection_matrix`]: Camera::update_projection_matrix
/// [`update_matrix_world`]: Camera::update_matrix_world
/// [`set_matrix_world_inverse`]: Camera::set_matrix_world_inverse
pub trait Camera {
    /// Recompute the projection from the camera's lens parameters.
    fn update_projection_matrix(&mut self);

    /// Recompute the world matrix from the camera's transform.
    fn update_matrix_world(&mut self);

    fn projection_matrix(&self) -> DMat4;

    fn matrix_world(&self) -> DMat4;

    /// The view matrix: world space to camera space.
    fn matrix_world_inverse(&self) -> DMat4;

    fn set_matrix_world_inverse(&mut self, inverse: DMat4);
}

/// A perspective camera with an OpenGL-style right-handed projection.
///
/// Looks down its local -Z axis.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub fov_y: f64,  // vertical FOV in radians
    pub aspect: f64, // width/height
    pub near: f64,
    pub far: f64,
    pub transform: Transform,
    projection: DMat4,
    world: DMat4,
    world_inverse: DMat4,
}

impl PerspectiveCamera {
    pub fn new(fov_y: f64, aspect: f64, near: f64, far: f64) -> Self {
        let mut camera = Self {
            fov_y,
            aspect,
            near,
            far,
            transform: Transform::identity(),
            projection: DMat4::IDENTITY,
            world: DMat4::IDENTITY,
            world_inverse: DMat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    pub fn at(mut self, position: Point3) -> Self {
        self.transform.position = position;
        self
    }

    /// Aim the camera at `target` with +Y as up.
    pub fn look_at(&mut self, target: Point3) {
        self.transform.look_at(target, Vector3::Y);
    }

    /// Update the aspect ratio after a surface resize.
    pub fn set_aspect(&mut self, width: f64, height: f64) {
        if height > 0.0 {
            self.aspect = width / height;
        }
    }
}

impl Default for PerspectiveCamera {
    /// Eye at (0, 0, 5), looking down -Z, 45° FOV, 16:9 aspect.
    fn default() -> Self {
        Self::new(std::f64::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0)
            .at(Point3::new(0.0, 0.0, 5.0))
    }
}

impl Camera for PerspectiveCamera {
    fn update_projection_matrix(&mut self) {
        self.projection = DMat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far);
    }

    fn update_matrix_world(&mut self) {
        self.world = self.transform.matrix();
    }

    fn projection_matrix(&self) -> DMat4 {
        self.projection
    }

    fn matrix_world(&self) -> DMat4 {
        self.world
    }

    fn matrix_world_inverse(&self) -> DMat4 {
        self.world_inverse
    }

    fn set_matrix_world_inverse(&mut self, inverse: DMat4) {
        self.world_inverse = inverse;
    }
}

/// An orthographic camera; the frustum is a box in camera space.
#[derive(Debug, Clone)]
pub struct OrthographicCamera {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub near: f64,
    pub far: f64,
    pub transform: Transform,
    projection: DMat4,
    world: DMat4,
    world_inverse: DMat4,
}

impl OrthographicCamera {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64, near: f64, far: f64) -> Self {
        let mut camera = Self {
            left,
            right,
            top,
            bottom,
            near,
            far,
            transform: Transform::identity(),
            projection: DMat4::IDENTITY,
            world: DMat4::IDENTITY,
            world_inverse: DMat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Frustum `width` x `height` centered on the view axis.
    pub fn from_size(width: f64, height: f64, near: f64, far: f64) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        Self::new(-hw, hw, hh, -hh, near, far)
    }

    pub fn at(mut self, position: Point3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn look_at(&mut self, target: Point3) {
        self.transform.look_at(target, Vector3::Y);
    }
}

impl Camera for OrthographicCamera {
    fn update_projection_matrix(&mut self) {
        self.projection = DMat4::orthographic_rh_gl(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        );
    }

    fn update_matrix_world(&mut self) {
        self.world = self.transform.matrix();
    }

    fn projection_matrix(&self) -> DMat4 {
        self.projection
    }

    fn matrix_world(&self) -> DMat4 {
        self.world
    }

    fn matrix_world_inverse(&self) -> DMat4 {
        self.world_inverse
    }

    fn set_matrix_world_inverse(&mut self, inverse: DMat4) {
        self.world_inverse = inverse;
    }
}
