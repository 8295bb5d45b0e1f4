mod app;
mod draw;
mod scenes;

use clap::Parser;
use winit::dpi::LogicalSize;

use cgkit_engine::device::GpuInit;
use cgkit_engine::logging::{init_logging, LoggingConfig};
use cgkit_engine::window::{Runtime, RuntimeConfig};

use app::StudioApp;
use scenes::SceneId;

#[derive(Parser, Debug)]
#[command(name = "cgkit-studio")]
#[command(about = "Interactive computer graphics demos: transforms, projection, viewports, lighting")]
#[command(version)]
struct Args {
    /// Scene to open instead of the menu
    #[arg(long, value_enum, default_value = "menu")]
    scene: SceneId,

    /// Log filter in env_logger syntax, e.g. "debug" or "cgkit_studio=debug,wgpu=warn"
    #[arg(long)]
    log: Option<String>,
}

fn main() {
    let args = Args::parse();

    init_logging(match args.log {
        Some(filter) => LoggingConfig::with_filter(filter),
        None => LoggingConfig::default(),
    });

    let config = RuntimeConfig {
        title: args.scene.title().to_string(),
        initial_size: LogicalSize::new(1000.0, 600.0),
    };
    // Scene colors are authored for a non-sRGB framebuffer.
    let gpu_init = GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    };

    if let Err(e) = Runtime::run(config, gpu_init, StudioApp::new(args.scene)) {
        eprintln!("cgkit-studio: {e:#}");
        std::process::exit(1);
    }
}
