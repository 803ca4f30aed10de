use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use gbcam_extract::export::{export_palette_grid, ExportConfig, SaveExporter};
use gbcam_extract::graphics::{catalog, Effect, MontageLayout, ReorderKey};
use gbcam_extract::logger;
use gbcam_extract::save::charset::CharFallback;
use gbcam_extract::save::DecodeOptions;

#[derive(Parser, Debug)]
#[command(name = "gbcam_extract", about = "Extract photos from Game Boy Camera saves")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the owner and photo list
    Info {
        save: PathBuf,
        /// Print the decoded save as JSON
        #[arg(long)]
        json: bool,
        /// Decode bytes without a glyph as spaces instead of dropping them
        #[arg(long)]
        keep_unknown_chars: bool,
    },
    /// Write every photo as a PNG plus save.json
    Export {
        save: PathBuf,
        output_dir: PathBuf,
        #[command(flatten)]
        render: RenderArgs,
        #[arg(long)]
        include_deleted: bool,
        /// Skip photos whose pixels are all one shade
        #[arg(long)]
        skip_uniform: bool,
        #[arg(long)]
        no_metadata: bool,
    },
    /// Combine several photos into one PNG
    Montage {
        save: PathBuf,
        output: PathBuf,
        /// horizontal, vertical, quadrant, four-quadrant, horizontal-2/3, horizontal-bars, border
        #[arg(long, default_value = "horizontal")]
        layout: String,
        /// 1-based photo slot; repeat in layout order
        #[arg(long = "photo", required = true)]
        photos: Vec<usize>,
        #[command(flatten)]
        render: RenderArgs,
    },
    /// Render all built-in palettes as a swatch grid
    Palettes {
        output: PathBuf,
        #[arg(long)]
        no_optimise: bool,
    },
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    #[arg(long, default_value = catalog::DEFAULT_PALETTE)]
    palette: String,
    /// i/invert, pa, pb, pc or pd
    #[arg(long, default_value = "none")]
    reorder: String,
    /// Applied in the order given, e.g. --effect mirror-ltr --effect invert
    #[arg(long = "effect")]
    effects: Vec<String>,
    #[arg(long)]
    no_optimise: bool,
}

impl RenderArgs {
    fn into_config(self) -> ExportConfig {
        let effects = self
            .effects
            .iter()
            .filter_map(|name| {
                let effect = Effect::from_name(name);
                if effect.is_none() {
                    error!("Ignoring unknown effect {:?}", name);
                }
                effect
            })
            .collect();

        ExportConfig {
            palette_key: self.palette,
            reorder: ReorderKey::from_key(&self.reorder),
            effects,
            optimise_png: !self.no_optimise,
            ..Default::default()
        }
    }
}

fn main() {
    logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> gbcam_extract::Result<()> {
    match command {
        Command::Info {
            save,
            json,
            keep_unknown_chars,
        } => {
            let exporter = SaveExporter::new(&save)?;
            let options = DecodeOptions {
                invalid_byte: if keep_unknown_chars {
                    CharFallback::Space
                } else {
                    CharFallback::Skip
                },
                ..Default::default()
            };
            let decoded = exporter.decode(options)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&decoded)?);
                return Ok(());
            }

            println!("Username: {}", decoded.username);
            println!("Gender: {}", decoded.gender);
            for photo in &decoded.photos {
                println!(
                    "  #{:02} frame {:>3} {} {}",
                    photo.index + 1,
                    photo.frame_id,
                    if photo.is_deleted { "deleted" } else { "       " },
                    photo.comment
                );
            }
            Ok(())
        }
        Command::Export {
            save,
            output_dir,
            render,
            include_deleted,
            skip_uniform,
            no_metadata,
        } => {
            let config = ExportConfig {
                include_deleted,
                skip_uniform,
                write_metadata: !no_metadata,
                ..render.into_config()
            };
            let exporter = SaveExporter::new(&save)?;
            info!("Save: {}", exporter.save_path().display());
            exporter.export_photos(&output_dir, &config)?;
            Ok(())
        }
        Command::Montage {
            save,
            output,
            layout,
            photos,
            render,
        } => {
            let config = render.into_config();
            let indices = photos
                .iter()
                .map(|&slot| {
                    slot.checked_sub(1)
                        .ok_or(gbcam_extract::Error::InvalidPhotoIndex(slot))
                })
                .collect::<gbcam_extract::Result<Vec<_>>>()?;

            let exporter = SaveExporter::new(&save)?;
            exporter.export_montage(
                &indices,
                MontageLayout::from_name(&layout),
                &output,
                &config,
            )
        }
        Command::Palettes {
            output,
            no_optimise,
        } => export_palette_grid(&output, !no_optimise),
    }
}
