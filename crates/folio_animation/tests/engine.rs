use folio_animation::{
    start, stop, AnimationConfig, Entity, IntervalTicker, ManualTicker, Preset, Viewport,
};
use folio_core::ColorScheme;
use folio_paint::{Color, PaintCommand, Point, Size, Vector};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

fn circle_centers(commands: &[PaintCommand]) -> Vec<Point> {
    commands
        .iter()
        .filter_map(|c| match c {
            PaintCommand::FillCircle { circle, .. } => Some(circle.center),
            _ => None,
        })
        .collect()
}

fn single_bouncer() -> AnimationConfig {
    AnimationConfig::new("bouncer", 1, |_| {
        Entity::bouncing_circle(
            Point::new(50.0, 50.0),
            Vector::new(6.0, 0.0),
            10.0,
            Color::BLACK,
        )
    })
}

#[test]
fn single_entity_reverses_after_crossing_the_right_edge() {
    let viewport = Arc::new(Viewport::new(Size::new(100.0, 100.0)));
    let ticker = Arc::new(ManualTicker::new());
    let handle = start(single_bouncer(), viewport.clone(), ticker.clone());
    let surface = handle.surface().expect("viewport has a drawing context");

    let mut xs = Vec::new();
    for _ in 0..10 {
        ticker.advance();
        let surface = surface.lock().unwrap();
        xs.push(circle_centers(surface.commands())[0].x);
    }

    // 56, 62, ..., 92 then back: 86, 80, 74
    assert_eq!(xs[6], 92.0);
    assert!(xs[7] < xs[6]);
    assert!(xs[8] < xs[7]);
    assert!(xs[9] < xs[8]);
    assert!(xs.iter().all(|x| *x <= 92.0));
}

#[test]
fn orbit_positions_are_reproducible_across_runs() {
    let run = || {
        let viewport = Arc::new(Viewport::new(Size::new(320.0, 240.0)));
        let ticker = Arc::new(ManualTicker::new());
        let handle = start(
            Preset::DesignTools.config(ColorScheme::Dark),
            viewport,
            ticker.clone(),
        );
        ticker.advance_by(25);
        let surface = handle.surface().unwrap();
        let commands = surface.lock().unwrap().commands().to_vec();
        commands
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);

    // 10 badges, each a filled circle and a label
    let labels = first
        .iter()
        .filter(|c| matches!(c, PaintCommand::DrawText { .. }))
        .count();
    assert_eq!(labels, 10);

    let centers = circle_centers(&first);
    let center = Point::new(160.0, 120.0);
    for point in centers {
        // R = 0.8 * min(160, 120)
        assert!((point.distance(center) - 96.0).abs() < 1e-3);
    }
}

#[test]
fn stopped_animation_never_draws_again() {
    let viewport = Arc::new(Viewport::new(Size::new(200.0, 200.0)));
    let ticker = Arc::new(ManualTicker::new());
    let handle = start(
        Preset::CodeBlocks.config(ColorScheme::Light).with_seed(5),
        viewport.clone(),
        ticker.clone(),
    );
    ticker.advance_by(3);
    let surface = handle.surface().unwrap();
    let snapshot = surface.lock().unwrap().commands().to_vec();

    stop(&handle);
    stop(&handle);
    assert!(!handle.is_running());
    assert_eq!(ticker.active_count(), 0);
    assert_eq!(viewport.observer_count(), 0);

    ticker.advance_by(5);
    viewport.resize(Size::new(50.0, 50.0));
    assert_eq!(handle.frames_rendered(), 3);
    assert_eq!(surface.lock().unwrap().commands(), snapshot.as_slice());
    assert_eq!(surface.lock().unwrap().logical_size(), Size::new(200.0, 200.0));
}

#[test]
fn stop_waits_for_a_frame_already_in_flight() {
    let viewport = Arc::new(Viewport::new(Size::new(100.0, 100.0)));
    let ticker = Arc::new(IntervalTicker::new(200).unwrap());
    let handle = start(single_bouncer(), viewport.clone(), ticker.clone());
    let surface = handle.surface().unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    while handle.frames_rendered() < 2 && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(1));
    }
    assert!(handle.frames_rendered() >= 2);

    // Park the ticker thread inside a frame
    let held = surface.lock().unwrap();
    thread::sleep(Duration::from_millis(30));

    let frames_at_stop = thread::scope(|scope| {
        let stopper = scope.spawn(|| {
            handle.stop();
            handle.frames_rendered()
        });
        thread::sleep(Duration::from_millis(30));
        assert!(!stopper.is_finished());
        drop(held);
        stopper.join().unwrap()
    });

    thread::sleep(Duration::from_millis(50));
    assert_eq!(handle.frames_rendered(), frames_at_stop);
    ticker.shutdown();
}

#[test]
fn resize_takes_effect_on_the_next_frame() {
    let viewport = Arc::new(Viewport::with_device_pixel_ratio(
        Size::new(200.0, 100.0),
        2.0,
    ));
    let ticker = Arc::new(ManualTicker::new());
    let handle = start(
        Preset::DesignTools.config(ColorScheme::Light),
        viewport.clone(),
        ticker.clone(),
    );
    ticker.advance();

    viewport.resize(Size::new(400.0, 400.0));
    let surface = handle.surface().unwrap();
    assert_eq!(surface.lock().unwrap().pixel_size(), (800, 800));

    ticker.advance();
    let surface = surface.lock().unwrap();
    assert_eq!(
        surface.commands()[0],
        PaintCommand::Clear {
            size: Size::new(400.0, 400.0)
        }
    );
    let center = Point::new(200.0, 200.0);
    for point in circle_centers(surface.commands()) {
        assert!((point.distance(center) - 160.0).abs() < 1e-3);
    }
}

#[test]
fn independent_instances_do_not_share_state() {
    let viewport_a = Arc::new(Viewport::new(Size::new(100.0, 100.0)));
    let viewport_b = Arc::new(Viewport::new(Size::new(100.0, 100.0)));
    let ticker = Arc::new(ManualTicker::new());

    let a = start(single_bouncer(), viewport_a, ticker.clone());
    ticker.advance_by(4);
    let b = start(single_bouncer(), viewport_b, ticker.clone());
    ticker.advance();

    let x_a = circle_centers(a.surface().unwrap().lock().unwrap().commands())[0].x;
    let x_b = circle_centers(b.surface().unwrap().lock().unwrap().commands())[0].x;
    assert_eq!(x_a, 80.0);
    assert_eq!(x_b, 56.0);

    drop(a);
    assert_eq!(ticker.active_count(), 1);
    assert!(b.is_running());
}
