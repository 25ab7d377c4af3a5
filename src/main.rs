use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use qrstamp::{
    BorderWidth, FormState, NamedColor, QrArtifact, RenderRequest, SaveTarget, Session,
    DEFAULT_FILE_NAME,
};

/// Generate a colored QR code PNG from a URL.
#[derive(Parser, Debug)]
#[command(name = "qrstamp", version, about)]
struct Args {
    /// Text or URL to encode
    #[arg(short, long)]
    url: Option<String>,

    /// Background color
    #[arg(short, long, default_value = "white")]
    background: NamedColor,

    /// Code (module) color
    #[arg(short, long, default_value = "black")]
    code_color: NamedColor,

    /// Quiet zone in modules: 1, 2, 3, 4, 5, 6 or 8
    #[arg(long, default_value = "4")]
    border: BorderWidth,

    /// Where to save the PNG. Nothing is written when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the code to the terminal
    #[arg(long)]
    ascii: bool,

    /// Print the PNG as a base64 data URL
    #[arg(long)]
    data_url: bool,

    /// List the available colors and exit
    #[arg(long)]
    list_colors: bool,

    /// Read commands from stdin instead of rendering once
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list_colors {
        print_colors(&mut out)?;
        return Ok(());
    }

    if args.interactive {
        let form = FormState {
            url: args.url.unwrap_or_default(),
            background: args.background.to_string(),
            code_color: args.code_color.to_string(),
            border: args.border.to_string(),
        };
        return run_interactive(form, io::stdin().lock(), &mut out);
    }

    let mut session = Session::default();
    let mut request = RenderRequest::new(args.url.unwrap_or_default());
    request.foreground(args.code_color).background(args.background).border(args.border);

    match session.generate(&request) {
        Ok(notice) => writeln!(out, "{notice}")?,
        Err(e) => {
            writeln!(out, "{e}")?;
            return Ok(());
        }
    }

    if let Some(artifact) = session.artifact() {
        print_previews(&mut out, artifact, args.ascii, args.data_url)?;
    }

    if let Some(result) = session.save_to(SaveTarget::from(args.output)) {
        match result {
            Ok(notice) => writeln!(out, "{notice}")?,
            Err(e) => writeln!(out, "{e}")?,
        }
    }

    Ok(())
}

fn print_colors(out: &mut impl Write) -> Result<()> {
    for color in NamedColor::ALL {
        writeln!(out, "{:<8} {}", color.name(), color.hex())?;
    }
    Ok(())
}

fn print_previews(
    out: &mut impl Write,
    artifact: &QrArtifact,
    ascii: bool,
    data_url: bool,
) -> Result<()> {
    if ascii {
        write!(out, "{}", artifact.to_text()?)?;
    }
    if data_url {
        writeln!(out, "{}", artifact.to_data_url())?;
    }
    Ok(())
}

const HELP: &str = "\
commands:
  url <text>       set the text to encode
  bg <color>       set the background color
  fg <color>       set the code color
  border <n>       set the quiet zone (1, 2, 3, 4, 5, 6, 8)
  generate         render the current form
  save [path]      save the last render (default qrcode.png)
  preview          print the last render to the terminal
  colors           list the available colors
  status           show the current form
  help             show this text
  quit             leave";

fn run_interactive(mut form: FormState, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut session = Session::default();
    writeln!(out, "{HELP}")?;

    for line in input.lines() {
        let line = line?;
        let (cmd, arg) = match line.trim().split_once(' ') {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line.trim(), ""),
        };

        match cmd {
            "" => continue,
            "url" => form.url = arg.to_string(),
            "bg" => match arg.parse::<NamedColor>() {
                Ok(c) => form.background = c.to_string(),
                Err(e) => writeln!(out, "{e}")?,
            },
            "fg" => match arg.parse::<NamedColor>() {
                Ok(c) => form.code_color = c.to_string(),
                Err(e) => writeln!(out, "{e}")?,
            },
            "border" => match arg.parse::<BorderWidth>() {
                Ok(b) => form.border = b.to_string(),
                Err(e) => writeln!(out, "{e}")?,
            },
            "generate" => {
                let msg = match form.to_request() {
                    Ok(request) => match session.generate(&request) {
                        Ok(notice) => notice.to_string(),
                        Err(e) => e.to_string(),
                    },
                    Err(e) => e.to_string(),
                };
                writeln!(out, "{msg}")?;
            }
            "save" => {
                let path = if arg.is_empty() { DEFAULT_FILE_NAME } else { arg };
                match session.save(path) {
                    Ok(notice) => writeln!(out, "{notice}")?,
                    Err(e) => writeln!(out, "{e}")?,
                }
            }
            "preview" => match session.artifact().map(QrArtifact::to_text) {
                Some(Ok(text)) => write!(out, "{text}")?,
                Some(Err(e)) => writeln!(out, "Error: {e}")?,
                None => writeln!(out, "Generate to see the QR code")?,
            },
            "colors" => print_colors(out)?,
            "status" => writeln!(
                out,
                "url: {:?}, background: {}, code color: {}, border: {}",
                form.url, form.background, form.code_color, form.border
            )?,
            "help" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => break,
            other => writeln!(out, "Unknown command: {other} (try `help`)")?,
        }
        out.flush()?;
    }

    Ok(())
}
