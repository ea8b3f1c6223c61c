/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r,
            g,
            b,
        }
    }
}

// #6f4e37
pub const BEAN_BODY: Rgb = Rgb::new(111.0/255.0, 78.0/255.0, 55.0/255.0);
// #3b2f2f
pub const BEAN_CREASE: Rgb = Rgb::new(59.0/255.0, 47.0/255.0, 47.0/255.0);
pub const STAR: Rgb = Rgb::new(1.0, 1.0, 1.0);

/// Affine transform in canvas order:
/// `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn translate(&mut self, x: f32, y: f32) {
        self.e += self.a*x + self.c*y;
        self.f += self.b*x + self.d*y;
    }

    pub fn rotate(&mut self, angle: f32) {
        let (sin, cos) = angle.sin_cos();
        let Self { a, b, c, d, .. } = *self;
        self.a = a*cos + c*sin;
        self.b = b*cos + d*sin;
        self.c = c*cos - a*sin;
        self.d = d*cos - b*sin;
    }

    pub fn apply(&self, x: f32, y: f32) -> [f32; 2] {
        [
            self.a*x + self.c*y + self.e,
            self.b*x + self.d*y + self.f,
        ]
    }

    /// Rotation angle carried by the linear part, in radians.
    pub fn rotation(&self) -> f32 {
        self.b.atan2(self.a)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState {
    pub transform: Transform,
    pub alpha: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Transform::IDENTITY,
            alpha: 1.0,
        }
    }
}

/// Save/restore bookkeeping shared by surface implementations.
#[derive(Debug, Default, Clone)]
pub struct StateStack {
    current: DrawState,
    saved: Vec<DrawState>,
}

impl StateStack {
    pub fn current(&self) -> &DrawState {
        &self.current
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Unbalanced restores are ignored.
    pub fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.current = state;
        }
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.current.transform.translate(x, y);
    }

    pub fn rotate(&mut self, angle: f32) {
        self.current.transform.rotate(angle);
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.current.alpha = alpha.clamp(0.0, 1.0);
    }

    pub fn apply(&self, x: f32, y: f32) -> [f32; 2] {
        self.current.transform.apply(x, y)
    }
}

/// The 2D raster primitives the particle field draws with.
///
/// Shape coordinates are local and go through the current transform; alpha
/// multiplies every fill and stroke until the enclosing `restore`.
pub trait Surface {
    fn bounds(&self) -> Bounds;

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, angle: f32);
    fn set_global_alpha(&mut self, alpha: f32);

    fn fill_ellipse(&mut self, x: f32, y: f32, radius_x: f32, radius_y: f32, color: Rgb);

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb) {
        self.fill_ellipse(x, y, radius, radius, color);
    }

    fn stroke_quadratic(&mut self, from: [f32; 2], control: [f32; 2], to: [f32; 2], line_width: f32, color: Rgb);
}

/// Point on the quadratic bezier `from -> control -> to` at `t`.
pub fn quadratic_point(from: [f32; 2], control: [f32; 2], to: [f32; 2], t: f32) -> [f32; 2] {
    let u = 1.0 - t;
    [
        u*u*from[0] + 2.0*u*t*control[0] + t*t*to[0],
        u*u*from[1] + 2.0*u*t*control[1] + t*t*to[1],
    ]
}
