use anyhow::{anyhow, Context};
use log::{debug, error, info, warn};

use sierpinski::prelude::*;

fn main() {
    env_logger::init();

    if let Err(e) = run(Settings::default()) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(settings: Settings) -> anyhow::Result<()> {
    let mut window = Window::fullscreen(&settings.title)
        .map_err(|e| anyhow!(e))
        .context("failed to open window")?;
    let (width, height) = (window.width(), window.height());
    info!("Opened {}x{} window \"{}\"", width, height, settings.title);

    let anchors = triangle_anchors(width, height, settings.anchor_margin);
    let start = start_point(width, height);
    info!(
        "Anchors at {:?}, starting from {:?}",
        anchors.iter().map(|v| v.position).collect::<Vec<_>>(),
        start
    );

    let mut game = ChaosGame::new(anchors, start)?;
    if let Some(limit) = settings.point_limit {
        game = game.with_point_limit(limit);
    }

    let mut renderer = Renderer::new(width, height);
    let mut limiter = FrameLimiter::new(&window, settings.frame_target_time());
    let mut frame: u64 = 0;

    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) => {
                window
                    .resize(w, h)
                    .map_err(|e| anyhow!(e))
                    .context("failed to resize window texture")?;
                renderer.resize(w, h);
                info!("Resized to {}x{}", w, h);
            }
            WindowEvent::Screenshot => match renderer.save_png(&settings.screenshot_path) {
                Ok(()) => info!("Saved frame to {}", settings.screenshot_path.display()),
                Err(e) => warn!(
                    "Could not save frame to {}: {}",
                    settings.screenshot_path.display(),
                    e
                ),
            },
            WindowEvent::None => {}
        }

        game.advance(settings.steps_per_frame);

        renderer.clear(settings.background);
        renderer.draw_snapshot(&game.snapshot(), settings.anchor_size, settings.point_size);

        window
            .present(renderer.as_bytes())
            .map_err(|e| anyhow!(e))
            .context("failed to present frame")?;

        frame += 1;
        if frame % settings.fps.max(1) == 0 {
            debug!(
                "frame {}: {} points plotted ({} steps)",
                frame,
                game.point_count(),
                game.steps_taken()
            );
        }

        limiter.wait_and_get_delta(&window);
    }

    info!("Exiting after {} frames", frame);
    Ok(())
}
