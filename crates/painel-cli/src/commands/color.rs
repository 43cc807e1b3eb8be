//! Color generator and palette commands

use anyhow::{Context, Result};
use painel_core::api::ColorApi;
use painel_core::{ColorGenerator, Generated, HexColor};

use super::render::swatch;

pub async fn cmd_color_random(api: &dyn ColorApi, with_palette: bool) -> Result<()> {
    let mut generator = ColorGenerator::new();

    if let Generated::Fallback { reason, .. } = generator.generate(api).await {
        eprintln!("⚠️  Failed to generate color ({}); using a local random color", reason);
    }

    print_color(&generator);

    if with_palette {
        print_palette(&generator, api).await?;
    }
    Ok(())
}

pub fn cmd_color_show(hex: &str) -> Result<()> {
    let mut generator = ColorGenerator::new();
    generator
        .set_color(hex)
        .context("Invalid format. Use #FFFFFF")?;
    print_color(&generator);
    Ok(())
}

pub async fn cmd_palette(api: &dyn ColorApi, hex: &str) -> Result<()> {
    let base = HexColor::parse(hex.trim()).context("Invalid format. Use #FF0000")?;
    let generator = ColorGenerator::with_color(base);
    print_palette(&generator, api).await
}

fn print_color(generator: &ColorGenerator) {
    let contrast = generator.contrast();
    println!();
    println!("   {}", swatch(generator.current(), contrast, 12));
    println!(
        "   RGB({}, {}, {})  luminance {:.3}  text: {}",
        contrast.rgb.r,
        contrast.rgb.g,
        contrast.rgb.b,
        contrast.luminance,
        contrast.text_color()
    );
}

async fn print_palette(generator: &ColorGenerator, api: &dyn ColorApi) -> Result<()> {
    let palette = generator
        .palette(api)
        .await
        .context("Could not generate the palette")?;

    println!();
    println!("🎨 Paleta gerada (base {})", palette.base);
    for color in &palette.colors {
        println!("   {}", swatch(color, &color.contrast(), 12));
    }
    Ok(())
}
