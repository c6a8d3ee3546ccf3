use anyhow::Result;
use clap::Parser;
use spritegen_core::{export, icon, layout, sprite, VERSION};

#[derive(Parser, Debug)]
#[command(name = "spritegen", version = VERSION, about = "Pack icon images into a sprite sheet plus JSON metadata")]
struct Cli {
    /// Directory containing the input icons
    #[arg(long, default_value = "icons")]
    icons: String,
    /// Where to write the composite image
    #[arg(long, default_value = export::SPRITE_IMAGE)]
    out_image: String,
    /// Where to write the placement metadata
    #[arg(long, default_value = export::SPRITE_METADATA)]
    out_meta: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let icons = icon::discover(&cli.icons)?;
    let layout = layout::compute(&icons);
    let canvas = sprite::composite(&icons, &layout);
    export::write_sprite(&canvas, &cli.out_image)?;
    export::write_metadata(&layout, &cli.out_meta)?;

    println!(
        "Wrote {}x{} sprite ({} icons) to {} and {}",
        layout.width,
        layout.height,
        icons.len(),
        cli.out_image,
        cli.out_meta
    );
    Ok(())
}
