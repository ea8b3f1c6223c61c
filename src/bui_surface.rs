use bui::{
    rect,
    renderer,
    ellipse::*,
};

use bean_cosmos::surface::{
    quadratic_point,
    Bounds,
    Rgb,
    StateStack,
    Surface,
};

/// Dots used to trace a stroked curve.
pub const CREASE_DOTS: usize = 6;
/// Worst case number of ellipse instances a single particle emits.
pub const ELLIPSES_PER_PARTICLE: usize = 1 + CREASE_DOTS;

/// Ellipse instances needed for `count` particles, `None` on overflow.
pub fn ellipse_capacity(count: usize) -> Option<usize> {
    count.checked_mul(ELLIPSES_PER_PARTICLE).map(|capacity| capacity.max(1))
}

/// One queued ellipse in clip space, ready to become a bui descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub cx: f32,
    pub cy: f32,
    pub sx: f32,
    pub sy: f32,
    pub aspect: f32,
    pub color: Rgb,
    pub alpha: f32,
}

/// Collects the frame as bui ellipse instances and uploads them on `flush`.
pub struct BuiSurface {
    bounds: Bounds,
    state: StateStack,
    placements: Vec<Placement>,
    ellipses: Vec<EllipseBuffer>,
    capacity: usize,
}

impl BuiSurface {
    pub fn new(bounds: Bounds, capacity: usize) -> Self {
        Self {
            bounds,
            state: StateStack::default(),
            placements: Vec::with_capacity(capacity),
            ellipses: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn flush(&mut self, ellipse_renderer: &mut EllipseRenderer, renderer: &renderer::Renderer) {
        let Bounds { width: resx, height: resy } = self.bounds;
        self.ellipses.clear();
        for placement in &self.placements {
            self.ellipses.push(EllipseDescriptor {
                sizing: rect::FillAspect {
                    placement_area: rect::SizeAndCenter {
                        sx: placement.sx,
                        sy: placement.sy,
                        cx: placement.cx,
                        cy: placement.cy,
                    },
                    centerx: 0.0,
                    centery: 0.0,
                    resx,
                    resy,
                    aspect: placement.aspect,
                }.into(),
                r: placement.color.r,
                g: placement.color.g,
                b: placement.color.b,
                a: placement.alpha,
            }.into());
        }
        ellipse_renderer.set_ellipse_buffer(renderer.queue(), self.ellipses.as_slice());
    }

    // Pixel space (origin top left, y down) to clip space (y up).
    fn push(&mut self, center: [f32; 2], extent_x: f32, extent_y: f32, color: Rgb) {
        if self.placements.len() >= self.capacity {
            log::warn!("Ellipse buffer full, dropping shape");
            return;
        }
        let Bounds { width: resx, height: resy } = self.bounds;
        if resx <= 0.0 || resy <= 0.0 || extent_y <= 0.0 {
            return;
        }
        self.placements.push(Placement {
            cx: center[0]/resx*2.0 - 1.0,
            cy: 1.0 - center[1]/resy*2.0,
            sx: extent_x*4.0/resx,
            sy: extent_y*4.0/resy,
            aspect: extent_x/extent_y,
            color,
            alpha: self.state.current().alpha,
        });
    }
}

impl Surface for BuiSurface {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    // The renderer clears the whole target on every pass, so any clear
    // just drops the queued shapes.
    fn clear_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) {
        self.placements.clear();
    }

    fn save(&mut self) {
        self.state.save();
    }

    fn restore(&mut self) {
        self.state.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.state.translate(x, y);
    }

    fn rotate(&mut self, angle: f32) {
        self.state.rotate(angle);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.state.set_alpha(alpha);
    }

    // bui ellipses are axis aligned, so a rotated ellipse becomes the one
    // spanning its rotated half extents.
    fn fill_ellipse(&mut self, x: f32, y: f32, radius_x: f32, radius_y: f32, color: Rgb) {
        let transform = self.state.current().transform;
        let center = transform.apply(x, y);
        let (sin, cos) = transform.rotation().sin_cos();
        let extent_x = ((radius_x*cos).powi(2) + (radius_y*sin).powi(2)).sqrt();
        let extent_y = ((radius_x*sin).powi(2) + (radius_y*cos).powi(2)).sqrt();
        self.push(center, extent_x, extent_y, color);
    }

    fn stroke_quadratic(&mut self, from: [f32; 2], control: [f32; 2], to: [f32; 2], line_width: f32, color: Rgb) {
        let radius = line_width/2.0;
        for i in 0..CREASE_DOTS {
            let t = i as f32/(CREASE_DOTS - 1) as f32;
            let [x, y] = quadratic_point(from, control, to, t);
            let center = self.state.apply(x, y);
            self.push(center, radius, radius, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bean_cosmos::surface::{BEAN_BODY, BEAN_CREASE, STAR};
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn surface() -> BuiSurface {
        BuiSurface::new(Bounds::new(800.0, 600.0), 16)
    }

    #[test]
    fn corners_map_to_clip_space() {
        let mut surface = surface();
        surface.fill_circle(0.0, 0.0, 2.0, STAR);
        surface.fill_circle(800.0, 600.0, 2.0, STAR);
        let placements = surface.placements();
        assert!(approx(placements[0].cx, -1.0) && approx(placements[0].cy, 1.0));
        assert!(approx(placements[1].cx, 1.0) && approx(placements[1].cy, -1.0));
        assert!(approx(placements[0].sx, 0.01) && approx(placements[0].sy, 8.0/600.0));
        assert!(approx(placements[0].aspect, 1.0));
    }

    #[test]
    fn quarter_turn_swaps_extents() {
        let mut surface = surface();
        surface.save();
        surface.translate(400.0, 300.0);
        surface.rotate(FRAC_PI_2);
        surface.set_global_alpha(0.6);
        surface.fill_ellipse(0.0, 0.0, 4.0, 2.0, BEAN_BODY);
        surface.restore();

        let placement = surface.placements()[0];
        assert!(approx(placement.cx, 0.0) && approx(placement.cy, 0.0));
        assert!(approx(placement.sx, 2.0*4.0/800.0));
        assert!(approx(placement.sy, 4.0*4.0/600.0));
        assert!(approx(placement.aspect, 0.5));
        assert!(approx(placement.alpha, 0.6));
        assert_eq!(placement.color, BEAN_BODY);
    }

    #[test]
    fn stroke_becomes_dots_along_the_curve() {
        let mut surface = surface();
        surface.stroke_quadratic([0.0, 0.0], [400.0, 0.0], [800.0, 0.0], 1.0, BEAN_CREASE);
        let placements = surface.placements();
        assert_eq!(placements.len(), CREASE_DOTS);
        assert!(approx(placements[0].cx, -1.0));
        assert!(approx(placements[CREASE_DOTS - 1].cx, 1.0));
    }

    #[test]
    fn clear_drops_queue_and_capacity_caps_it() {
        let mut surface = BuiSurface::new(Bounds::new(800.0, 600.0), 2);
        for _ in 0..5 {
            surface.fill_circle(10.0, 10.0, 1.0, STAR);
        }
        assert_eq!(surface.placements().len(), 2);
        surface.clear_rect(0.0, 0.0, 800.0, 600.0);
        assert!(surface.placements().is_empty());
    }

    #[test]
    fn zero_sized_surface_queues_nothing() {
        let mut surface = BuiSurface::new(Bounds::new(0.0, 0.0), 4);
        surface.fill_circle(0.0, 0.0, 1.0, STAR);
        assert!(surface.placements().is_empty());
    }

    #[test]
    fn capacity_overflow_is_reported() {
        assert_eq!(ellipse_capacity(100), Some(100*ELLIPSES_PER_PARTICLE));
        assert_eq!(ellipse_capacity(0), Some(1));
        assert_eq!(ellipse_capacity(usize::MAX), None);
    }
}
