use scrollreveal::{
    BoundingBox, Preset, RecordingSink, StaticMeasurements, Timeline, drive, keys,
    uniform_samples,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let timeline = Timeline::from_preset(Preset::Refined)?;
    let mut sink = RecordingSink::new();
    drive(&timeline, uniform_samples(10), &mut sink)?;

    for frame in sink.frames() {
        let css = frame.to_css_map();
        println!(
            "p={:.2} heroImageScale={} copyOpacity={} mask={}",
            frame.progress,
            css[keys::HERO_IMAGE_SCALE],
            css[keys::COPY_OPACITY],
            css[keys::MASK_BOUNDARY_PERCENT],
        );
    }

    let provider = StaticMeasurements::new()
        .with("logoContainer", BoundingBox::new(0.0, 0.0, 320.0, 180.0))
        .with("logoMask", BoundingBox::new(0.0, 0.0, 120.0, 120.0));
    let measured = timeline.evaluate_with_fit(0.6, &provider, "logoContainer", "logoMask");
    println!("logo fit: {}", measured.fit?.to_svg());

    Ok(())
}
