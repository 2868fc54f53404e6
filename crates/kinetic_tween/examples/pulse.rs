//! Drive a small tween group over simulated frames and print the values.
//!
//! Run with: cargo run -p kinetic_tween --example pulse

use kinetic_tween::{Direction, Ease, Family, SampledCurve, TweenGroup};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut group = TweenGroup::new();

    // Opacity fades in over half a second after a short hold.
    let opacity = group.create(
        Ease::new(Family::Quadratic, Direction::Out),
        0.0f32,
        1.0,
        0.5,
        0.1,
        1.0,
    );

    // Scale pops past its target and settles back.
    let scale = group.create(
        Ease::new(Family::Elastic, Direction::Out),
        0.6f32,
        1.0,
        0.6,
        0.0,
        1.0,
    );

    // A hand-authored pulse curve: up, overshoot, settle.
    let curve = SampledCurve::new([0.0, 0.6, 1.2, 0.9, 1.0]).unwrap();
    let glow = group.create_curve(
        curve,
        Ease::new(Family::Sinusoidal, Direction::InOut),
        0.0,
        1.0,
        0.6,
        0.0,
        1.0,
    );

    let frame = 1.0 / 60.0;
    let mut elapsed = 0.0;
    while !group.is_done() {
        group.advance(frame);
        elapsed += frame;
        println!(
            "t={elapsed:.3} opacity={:.3} scale={:.3} glow={:.3}",
            group.get::<f32>(opacity).unwrap().value(),
            group.get::<f32>(scale).unwrap().value(),
            group.get_curve::<SampledCurve>(glow).unwrap().value(),
        );
    }
}
