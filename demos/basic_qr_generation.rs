use std::error::Error;

use qrstamp::{RenderPipeline, RenderRequest};

fn main() -> Result<(), Box<dyn Error>> {
    // Simplest usage - black on white, border of 4 modules
    let artifact = RenderPipeline::default().render(&RenderRequest::new("https://example.com"))?;

    // Write the PNG bytes as they are
    std::fs::write("simple_qr.png", artifact.as_bytes())?;

    let (w, h) = artifact.dimensions()?;
    println!("Simple QR code ({w}x{h}) saved to: simple_qr.png");
    Ok(())
}
