use std::collections::HashMap;
use std::path::{Path, PathBuf};

use clap::{App, Arg, ArgMatches, SubCommand};
use env_logger::Env;
use fastschem::{
    block_histogram, block_name, ColourPalette, DecodedSchematic, RenderOptions, Rgba, Schematic,
    TopDownRenderer,
};
use log::{error, info};
use rayon::prelude::*;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn load(args: &ArgMatches) -> Result<DecodedSchematic> {
    let path = args.value_of("file").ok_or("no schematic given")?;
    let file = std::fs::File::open(path)?;
    let schematic = Schematic::from_reader(file)?;

    info!(
        "{}: {}x{}x{}",
        path, schematic.width, schematic.height, schematic.length
    );
    Ok(schematic.decode()?)
}

fn parse_num<T: std::str::FromStr>(args: &ArgMatches, name: &str) -> Result<Option<T>> {
    match args.value_of(name) {
        Some(v) => Ok(Some(v.parse().map_err(|_| format!("bad --{}: {}", name, v))?)),
        None => Ok(None),
    }
}

/// A stand-in palette for when none is given: every named block gets a
/// colour derived from its name.
fn name_palette() -> ColourPalette {
    let mut colours = HashMap::new();
    for id in 1..=255 {
        if let Some(name) = block_name(id) {
            let hash = name
                .bytes()
                .fold(0x811c9dc5u32, |h, b| (h ^ b as u32).wrapping_mul(0x01000193));
            let [r, g, b, _] = hash.to_le_bytes();
            let colour: Rgba = [r, g, b, 255];
            colours.insert(format!("minecraft:{}", name), colour);
        }
    }
    ColourPalette::new(colours)
}

fn get_palette(path: Option<&str>) -> Result<ColourPalette> {
    match path {
        Some(path) => {
            let f = std::fs::File::open(path)?;
            Ok(ColourPalette::from_reader(f)?)
        }
        None => Ok(name_palette()),
    }
}

fn info_cmd(args: &ArgMatches) -> Result<()> {
    let decoded = load(args)?;
    let (w, h, l) = decoded.size();

    println!("size: {}x{}x{}", w, h, l);
    println!("faulty blocks: {}", decoded.faulty_blocks());
    println!("dropped tile entities: {}", decoded.dropped_tile_entities());

    for (name, count) in block_histogram(decoded.blocks()) {
        println!("{:>8} {}", count, name);
    }
    Ok(())
}

fn dump_cmd(args: &ArgMatches) -> Result<()> {
    let decoded = load(args)?;
    let (_, height, _) = decoded.size();

    let layers = match parse_num::<usize>(args, "layer")? {
        Some(y) if y >= height => return Err(format!("layer {} out of range", y).into()),
        Some(y) => y..y + 1,
        None => 0..height,
    };

    for y in layers {
        println!("# layer {}", y);
        print!("{}", decoded.layer_text(y));
    }
    Ok(())
}

fn render_cmd(args: &ArgMatches) -> Result<()> {
    let mut decoded = load(args)?;
    let palette = get_palette(args.value_of("palette"))?;

    if let Some(turns) = parse_num::<usize>(args, "turn")? {
        for _ in 0..turns % 4 {
            decoded = decoded.turned(true);
        }
    }

    let options = RenderOptions {
        zoom: parse_num(args, "zoom")?.unwrap_or(16),
        see_through: parse_num(args, "see-through")?.unwrap_or(0),
    };
    let out = PathBuf::from(args.value_of("out").unwrap_or("schematic.png"));
    let (_, height, _) = decoded.size();

    if args.is_present("all") {
        let failed = (0..height)
            .into_par_iter()
            .filter_map(|y| {
                let mut renderer = TopDownRenderer::new(&palette, options);
                let img = renderer.render_layer(&decoded, y);
                let path = layer_path(&out, y);
                match img.save(&path) {
                    Ok(_) => None,
                    Err(e) => {
                        error!("{}: {}", path.display(), e);
                        Some(y)
                    }
                }
            })
            .count();

        info!("{} layers rendered", height - failed);
        return Ok(());
    }

    let y = parse_num(args, "layer")?.unwrap_or(0);
    if y >= height {
        return Err(format!("layer {} out of range", y).into());
    }

    let mut renderer = TopDownRenderer::new(&palette, options);
    let img = renderer.render_layer(&decoded, y);
    img.save(&out)?;

    info!("{} sprites drawn", renderer.cache().len());
    info!("saved {}", out.display());
    Ok(())
}

fn layer_path(out: &Path, y: usize) -> PathBuf {
    let stem = out
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("schematic");
    out.with_file_name(format!("{}-{}.png", stem, y))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let file = || Arg::with_name("file").takes_value(true).required(true);
    let layer = || {
        Arg::with_name("layer")
            .long("layer")
            .takes_value(true)
            .required(false)
    };

    let matches = App::new("schem")
        .subcommand(SubCommand::with_name("info").arg(file()))
        .subcommand(SubCommand::with_name("dump").arg(file()).arg(layer()))
        .subcommand(
            SubCommand::with_name("render")
                .arg(file())
                .arg(layer())
                .arg(
                    Arg::with_name("zoom")
                        .long("zoom")
                        .takes_value(true)
                        .required(false),
                )
                .arg(
                    Arg::with_name("see-through")
                        .long("see-through")
                        .takes_value(true)
                        .required(false),
                )
                .arg(
                    Arg::with_name("turn")
                        .long("turn")
                        .takes_value(true)
                        .required(false),
                )
                .arg(
                    Arg::with_name("palette")
                        .long("palette")
                        .takes_value(true)
                        .required(false),
                )
                .arg(
                    Arg::with_name("out")
                        .long("out")
                        .takes_value(true)
                        .required(false)
                        .default_value("schematic.png"),
                )
                .arg(
                    Arg::with_name("all")
                        .long("all")
                        .takes_value(false)
                        .required(false),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        ("info", Some(args)) => info_cmd(args)?,
        ("dump", Some(args)) => dump_cmd(args)?,
        ("render", Some(args)) => render_cmd(args)?,
        _ => error!("{}", matches.usage()),
    };

    Ok(())
}
