use crate::surface::{Bounds, Rgb, StateStack, Surface};

/// One primitive as it landed on the surface, in device pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Ellipse {
        center: [f32; 2],
        radius_x: f32,
        radius_y: f32,
        rotation: f32,
        alpha: f32,
        color: Rgb,
    },
    Stroke {
        from: [f32; 2],
        control: [f32; 2],
        to: [f32; 2],
        line_width: f32,
        alpha: f32,
        color: Rgb,
    },
}

/// A surface that keeps a log of what was drawn instead of rasterising it.
#[derive(Debug)]
pub struct RecordingSurface {
    bounds: Bounds,
    state: StateStack,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            state: StateStack::default(),
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn state(&self) -> &StateStack {
        &self.state
    }

    pub fn ellipse_count(&self) -> usize {
        self.commands.iter().filter(|command| matches!(command, DrawCommand::Ellipse { .. })).count()
    }

    pub fn stroke_count(&self) -> usize {
        self.commands.iter().filter(|command| matches!(command, DrawCommand::Stroke { .. })).count()
    }
}

impl Surface for RecordingSurface {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let covers_surface = x <= 0.0 && y <= 0.0 && x + width >= self.bounds.width && y + height >= self.bounds.height;
        if covers_surface {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::Clear {
            x,
            y,
            width,
            height,
        });
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

    fn fill_ellipse(&mut self, x: f32, y: f32, radius_x: f32, radius_y: f32, color: Rgb) {
        let current = self.state.current();
        self.commands.push(DrawCommand::Ellipse {
            center: current.transform.apply(x, y),
            radius_x,
            radius_y,
            rotation: current.transform.rotation(),
            alpha: current.alpha,
            color,
        });
    }

    fn stroke_quadratic(&mut self, from: [f32; 2], control: [f32; 2], to: [f32; 2], line_width: f32, color: Rgb) {
        let current = self.state.current();
        self.commands.push(DrawCommand::Stroke {
            from: current.transform.apply(from[0], from[1]),
            control: current.transform.apply(control[0], control[1]),
            to: current.transform.apply(to[0], to[1]),
            line_width,
            alpha: current.alpha,
            color,
        });
    }
}
