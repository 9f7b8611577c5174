use arplace::{
    components::{MemoryScene, SurfacePlane, ViewCamera},
    runtime::{Feedback, Session, SessionConfig},
};

mod program_args;
mod step;

pub use program_args::*;
pub use step::*;

pub fn run(options: ScriptOptions) -> anyhow::Result<()> {
    let config = SessionConfig::builder()
        .with_asset_name(&options.asset)
        .with_scale_range(options.min_scale, options.max_scale)
        .build()?;

    let camera = ViewCamera::new(options.view.width, options.view.height).ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid view size {}x{}: both extents must be positive",
            options.view.width,
            options.view.height
        )
    })?;
    let mut scene = MemoryScene::new(camera);
    if !options.surface.no_surface {
        scene.add_plane(
            SurfacePlane::horizontal(options.surface.surface_height)
                .with_estimated(options.surface.estimated),
        );
    }
    if !options.missing_asset {
        scene.register_asset(config.asset_name());
    }

    let mut session = Session::new(config);
    for (index, step) in options.steps.iter().enumerate() {
        let feedback = match step {
            Step::Tap(point) => session.on_tap(*point, &mut scene),
            Step::Pinch(event) => session.on_pinch(*event, &mut scene),
        };
        println!("{:>3} {:<16} {}", index, step.to_string(), describe(&feedback));
        if let Some(message) = feedback.user_message() {
            println!("    > {}", message);
        }
    }

    println!("scene: {} object(s)", scene.len());
    for (handle, object) in scene.objects() {
        let marker = if session.selected() == Some(handle) {
            "*"
        } else {
            " "
        };
        let position = object.anchor().map(|anchor| *anchor.pose.position());
        println!(
            "  {} {} '{}' scale={:?} anchor={:?}",
            marker,
            handle,
            object.asset_name(),
            object.local_transform().get_scale(),
            position
        );
    }

    Ok(())
}

fn describe(feedback: &Feedback) -> String {
    match feedback {
        Feedback::Placed(placement) => format!(
            "placed {} at {:?}",
            placement.object,
            placement.pose.position()
        ),
        Feedback::PlacementFailed(e) => format!("placement failed: {}", e),
        Feedback::ScaleStarted { object, baseline } => {
            format!("scaling {} from {:?}", object, baseline)
        }
        Feedback::Scaled { object, scale } => format!("{} -> {:?}", object, scale),
        Feedback::ScaleEnded { object, scale } => format!("{} final {:?}", object, scale),
        Feedback::ScaleCancelled { object, restored } => {
            format!("{} restored {:?}", object, restored)
        }
        Feedback::GestureIgnored(e) => format!("ignored: {}", e),
    }
}
