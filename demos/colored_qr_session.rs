use std::error::Error;

use qrstamp::{BorderWidth, NamedColor, RenderRequest, Session};

fn main() -> Result<(), Box<dyn Error>> {
    let mut session = Session::default();

    let mut request = RenderRequest::new("https://www.rust-lang.org");
    request
        .foreground(NamedColor::Navy)          // Code color - defaults to black
        .background(NamedColor::Gold)          // Background - defaults to white
        .border(BorderWidth::new(2)?);         // Quiet zone - one of 1, 2, 3, 4, 5, 6, 8
    println!("{}", session.generate(&request)?);

    // Same color twice is rejected and the navy on gold code stays held
    request.background(NamedColor::Navy);
    if let Err(e) = session.generate(&request) {
        println!("{e}");
    }

    println!("{}", session.save("colored_qr.png")?);
    if let Some(artifact) = session.artifact() {
        print!("{}", artifact.to_text()?);
    }

    Ok(())
}
