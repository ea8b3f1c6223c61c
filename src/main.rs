mod bui_surface;
mod cli;
mod error;

use winit::{
    dpi::PhysicalSize,
    event::{
        Event,
        WindowEvent,
    },
    event_loop::ControlFlow,
    window::Window,
};
use bui::{
    renderer,
    resolution_buffer::ResolutionBuffer,
    ellipse::*,
};
use std::{
    thread,
    time::{
        Duration,
        Instant,
    },
};
use clap::Parser;

use bean_cosmos::*;

use crate::{
    bui_surface::{ellipse_capacity, BuiSurface},
    cli::Cli,
    error::LaunchError,
};

type FieldRef<'a> = &'a mut ParticleField;
type RendererRef<'a> = &'a renderer::Renderer;
type ResolutionBufferRef<'a> = &'a mut ResolutionBuffer;
constrainer::create_constrainer!(Constrainer {
    dynamic resx f32
    dynamic resy f32
    external field FieldRef
    external renderer RendererRef
    external resolution_buffer ResolutionBufferRef

    listener set_resolution_buffer (resx, resy, resolution_buffer, renderer) {
        resolution_buffer.set(&[resx, resy], renderer.queue());
    }

    listener reseed_field (resx, resy, field) {
        field.on_resize(resx, resy);
    }

    opgenset (resx, resy)
});

struct RedrawScheduler<'a>(&'a Window);

impl FrameScheduler for RedrawScheduler<'_> {
    fn request_frame(&mut self) {
        self.0.request_redraw();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let frame_budget = cli.frame_budget()?;

    match cli.headless {
        Some(frames) => run_headless(&cli, frames),
        None => run_window(cli, frame_budget),
    }
}

fn build_field(cli: &Cli, bounds: Bounds) -> ParticleField {
    match cli.seed {
        Some(seed) => ParticleField::seeded(bounds, cli.count, seed),
        None => ParticleField::new(bounds, cli.count),
    }
}

fn run_headless(cli: &Cli, frames: u64) -> anyhow::Result<()> {
    let bounds = Bounds::new(cli.width as f32, cli.height as f32);
    let mut animation = AnimationLoop::new(build_field(cli, bounds));
    let mut surface = RecordingSurface::new(bounds);
    let mut pending = PendingFrame::default();

    let timer = Instant::now();
    while animation.frames() < frames && animation.frame(&mut surface, &mut pending) {
        pending.take();
    }
    log::info!("Simulated {} frames in {:?}", animation.frames(), timer.elapsed());

    let beans = animation.field().particles().iter().filter(|particle| particle.variant == Variant::Bean).count();
    println!("frames: {}", animation.frames());
    println!("particles: {} ({} beans, {} stars)", animation.field().len(), beans, animation.field().len() - beans);
    println!("shapes in last frame: {} fills, {} strokes", surface.ellipse_count(), surface.stroke_count());
    Ok(())
}

fn run_window(cli: Cli, frame_budget: Duration) -> anyhow::Result<()> {
    let capacity = ellipse_capacity(cli.count).ok_or(LaunchError::TooManyParticles(cli.count))?;
    let event_loop = winit::event_loop::EventLoop::new();
    let window = winit::window::WindowBuilder::new()
        .with_title("Bean Cosmos")
        .with_inner_size(PhysicalSize::new(cli.width, cli.height))
        .build(&event_loop)
        .map_err(LaunchError::from)?;
    let mut renderer = futures::executor::block_on(renderer::Renderer::new(&window));
    let mut resolution_buffer = ResolutionBuffer::new(renderer.device());
    let mut ellipse_renderer = EllipseRenderer::new(renderer.device(), renderer.config().format, &resolution_buffer, capacity as wgpu::BufferAddress);

    let size = window.inner_size();
    let bounds = Bounds::new(size.width as f32, size.height as f32);
    let mut animation = AnimationLoop::new(build_field(&cli, bounds));
    let mut surface = BuiSurface::new(bounds, capacity);
    let mut constrainer = Constrainer::new(bounds.width, bounds.height, animation.field_mut(), &renderer, &mut resolution_buffer);
    log::info!("Drawing {} particles on {}x{}", cli.count, size.width, size.height);

    let mut last_frame_time = Instant::now();
    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                animation.stop();
                log::info!("Closing after {} frames", animation.frames());
                *control_flow = ControlFlow::Exit
            },
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let new_size = match event {
                    WindowEvent::Resized(physical_size) => Some(*physical_size),
                    WindowEvent::ScaleFactorChanged {
                        new_inner_size,
                        ..
                    } => Some(**new_inner_size),
                    _ => None,
                };
                if let Some(physical_size) = new_size {
                    log::debug!("Resized to {}x{}", physical_size.width, physical_size.height);
                    renderer.resize(physical_size);
                    surface.resize(Bounds::new(physical_size.width as f32, physical_size.height as f32));
                    constrainer.set_resx_resy(
                        physical_size.width as f32,
                        physical_size.height as f32,
                        animation.field_mut(),
                        &renderer,
                        &mut resolution_buffer,
                    )
                }
            },
            Event::RedrawRequested(_) => {
                match renderer.surface().get_current_texture() {
                    Ok(surface_texture) => {
                        let view = surface_texture.texture.create_view(&wgpu::TextureViewDescriptor::default());
                        let mut encoder = renderer.device().create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("Render encoder"),
                        });
                        animation.frame(&mut surface, &mut RedrawScheduler(&window));
                        surface.flush(&mut ellipse_renderer, &renderer);
                        ellipse_renderer.render_all(&mut encoder, &view, wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.0,
                            g: 0.0,
                            b: 0.0,
                            a: 1.0
                        }));
                        renderer.queue().submit(std::iter::once(encoder.finish()));
                        surface_texture.present();
                    },
                    Err(wgpu::SurfaceError::Lost) => {
                        log::warn!("Surface lost, reconfiguring");
                        renderer.reconfigure();
                        if animation.is_running() {
                            window.request_redraw();
                        }
                    },
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                        animation.stop();
                        *control_flow = ControlFlow::Exit;
                    },
                    Err(e) => {
                        log::warn!("Surface error: {:?}", e);
                        if animation.is_running() {
                            window.request_redraw();
                        }
                    },
                };
                thread::sleep(frame_budget.saturating_sub(last_frame_time.elapsed()));
                last_frame_time = Instant::now();
            },
            _ => ()
        }
    })
}
