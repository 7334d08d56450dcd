use anyhow::{Context, bail};

use gltfvis::animation::FrameContext;
use gltfvis::renderer::HeadlessUploader;
use gltfvis::settings::PlaybackSettings;
use gltfvis::{Scene, load_gltf};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let Some(path) = args.get(1) else {
        let program = args.first().map_or("gltfvis-rs", String::as_str);
        bail!("usage: {program} <model.gltf|model.glb>");
    };

    let settings = PlaybackSettings::load();
    let asset = load_gltf(path).with_context(|| format!("failed to load '{path}'"))?;

    let mut uploader = HeadlessUploader::new();
    let scene = Scene::import(&asset, &mut uploader);
    log::info!("Uploaded {} bytes", uploader.total_bytes());

    for issue in &scene.report.issues {
        log::warn!("{issue}");
    }
    for (i, material) in scene.materials.iter().enumerate() {
        log::debug!(
            "Material {i} '{}': {}, cutoff {}, cull back faces: {}",
            material.name,
            material.alpha_mode.name(),
            material.alpha_cutoff,
            material.cull_back_faces()
        );
    }
    for draw in &scene.draws {
        log::debug!(
            "Draw {:?}: {} indices of {} bytes, {:?}, material {:?}",
            draw.vertex_array,
            draw.index_count,
            draw.index_format.width(),
            draw.topology,
            scene.material(draw).map(|m| m.name.as_str())
        );
    }
    if let Some(bounds) = scene.bounds() {
        log::info!("Bounds: center {:?}, size {:?}", bounds.center(), bounds.size());
    }

    let Some(clip) = scene.active_clip() else {
        log::info!("No animations, nothing to play");
        return Ok(());
    };
    log::info!(
        "Playing '{}': {} channels, duration {:.3}s",
        clip.name,
        clip.channels.len(),
        clip.duration
    );

    let mut frame = FrameContext::new();
    if settings.start_paused {
        frame.player.pause();
    }

    for i in 0..settings.simulated_frames {
        let transforms = frame.update_with_delta(Some(clip), settings.fixed_timestep);
        if settings.log_transforms {
            let m = transforms.model_matrix();
            log::info!(
                "Frame {i:4} t={:.3}: translation ({:.3}, {:.3}, {:.3})",
                frame.player.time(),
                m[(0, 3)],
                m[(1, 3)],
                m[(2, 3)]
            );
            for (node, matrix) in transforms.iter() {
                log::trace!("  node {node}: {:?}", matrix.as_slice());
            }
        }
    }

    Ok(())
}
