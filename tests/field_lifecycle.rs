use bean_cosmos::*;
use bean_cosmos::particle::RESPAWN_OFFSET;

#[test]
fn thousand_ticks_keep_a_hundred_particles() {
    let bounds = Bounds::new(800.0, 600.0);
    let mut animation = AnimationLoop::new(ParticleField::seeded(bounds, ParticleField::DEFAULT_COUNT, 2024));
    let mut surface = RecordingSurface::new(bounds);
    let mut pending = PendingFrame::default();
    assert_eq!(animation.field().len(), 100);

    while animation.frames() < 1000 {
        animation.frame(&mut surface, &mut pending);
        assert!(pending.take());
    }

    assert_eq!(animation.field().len(), 100);
    assert_eq!(surface.ellipse_count(), 100);
    for particle in animation.field().particles() {
        assert!(particle.x >= 0.0 && particle.x < bounds.width);
        assert!(particle.y >= -RESPAWN_OFFSET && particle.y <= bounds.height);
        assert!(particle.size > 0.0 && particle.speed > 0.0);
    }
}

#[test]
fn resize_mid_run_rescatters() {
    let mut animation = AnimationLoop::new(ParticleField::seeded(Bounds::new(800.0, 600.0), 100, 99));
    let mut surface = RecordingSurface::new(Bounds::new(800.0, 600.0));
    let mut pending = PendingFrame::default();
    for _ in 0..10 {
        animation.frame(&mut surface, &mut pending);
    }

    let bounds = Bounds::new(400.0, 300.0);
    surface.resize(bounds);
    animation.field_mut().on_resize(bounds.width, bounds.height);
    assert_eq!(animation.field().len(), 100);
    for particle in animation.field().particles() {
        assert!(particle.x >= 0.0 && particle.x < 400.0);
        assert!(particle.y >= 0.0 && particle.y < 300.0);
    }

    animation.frame(&mut surface, &mut pending);
    assert_eq!(surface.commands()[0], DrawCommand::Clear {
        x: 0.0,
        y: 0.0,
        width: 400.0,
        height: 300.0,
    });
}
