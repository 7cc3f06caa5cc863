use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use failure::Fallible;
use structopt::clap::AppSettings;
use structopt::StructOpt;

use charmap_table::{emit, Extractor};

const USAGE: &str = "Usage: charmap <font_file.c>";

#[derive(Debug, StructOpt)]
#[structopt(
    name = "charmap",
    global_settings = &[
        AppSettings::AllowLeadingHyphen,
        AppSettings::DisableHelpFlags,
        AppSettings::DisableVersion,
    ]
)]
struct Opt {
    /// font2c generated font source
    #[structopt(parse(from_os_str), allow_hyphen_values = true)]
    input: PathBuf,
}

fn run(opt: &Opt) -> Fallible<()> {
    let extractor = Extractor::new()?;
    let extraction = extractor.extract_file(&opt.input)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for unresolved in extraction.unresolved() {
        writeln!(out, "Warning: {}", unresolved)?;
    }
    writeln!(
        out,
        "Extracted {} characters from {}",
        extraction.entries().len(),
        opt.input.display()
    )?;

    writeln!(out)?;
    emit::write_table(extraction.entries(), &mut out)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}

fn main() {
    env_logger::init();

    // Anything other than exactly one input path is a usage error. The
    // single argument is always the path, even when it looks like a flag.
    let args = std::env::args_os().collect::<Vec<_>>();
    if args.len() != 2 {
        println!("{}", USAGE);
        process::exit(1);
    }

    let opt = match Opt::from_iter_safe(args) {
        Ok(opt) => opt,
        Err(err) => {
            log::debug!("argument error: {}", err);
            println!("{}", USAGE);
            process::exit(1);
        }
    };

    if let Err(err) = run(&opt) {
        println!("Error: {}", err);
        process::exit(1);
    }
}
