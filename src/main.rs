use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

use projkit::ProjKit;
use projkit::commands::{CommandFactory, ProjkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("projkit")
        .version("0.1.0")
        .author("Maurice Schilpp")
        .about("CRS helpers: UTM zones, bounds merging, grid alignment and reprojection")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file overriding the default settings")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("latlon")
                .long("latlon")
                .help("Get the UTM zone and EPSG code of a point given as 'lat,lon'")
                .value_name("LAT,LON")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("zone")
                .long("zone")
                .help("Get the EPSG code of a UTM zone (e.g. 31N, 08s)")
                .value_name("ZONE")
                .required(false),
        )
        .arg(
            Arg::new("merge")
                .long("merge")
                .help("Bounding box to merge (minx,miny,maxx,maxy), repeat for each box")
                .value_name("BBOX")
                .allow_hyphen_values(true)
                .action(ArgAction::Append)
                .required(false),
        )
        .arg(
            Arg::new("algorithm")
                .long("algorithm")
                .help("Merging algorithm (union or intersection)")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("resolution")
                .long("resolution")
                .help("Snap the merged extent to a multiple of this resolution")
                .value_name("RES")
                .required(false),
        )
        .arg(
            Arg::new("align")
                .long("align")
                .help("Bounding box to align to the reference grid (minx,miny,maxx,maxy)")
                .value_name("BBOX")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("transform")
                .long("transform")
                .help("Reference affine transform 'a,b,c,d,e,f'")
                .value_name("AFFINE")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("reproject")
                .long("reproject")
                .help("Points to reproject, 'x,y;x,y;...'")
                .value_name("POINTS")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("to-latlon")
                .long("to-latlon")
                .help("Reproject points from --s-crs to lat/lon")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("from-latlon")
                .long("from-latlon")
                .help("Reproject 'lat,lon' points to --t-crs")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("transform-bounds")
                .long("transform-bounds")
                .help("Bounding box to reproject with edge densification (minx,miny,maxx,maxy)")
                .value_name("BBOX")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("densify")
                .long("densify")
                .help("Points inserted along each edge by --transform-bounds")
                .value_name("N")
                .required(false),
        )
        .arg(
            Arg::new("s-crs")
                .long("s-crs")
                .help("Source CRS (e.g. EPSG:32631)")
                .value_name("CRS")
                .required(false),
        )
        .arg(
            Arg::new("t-crs")
                .long("t-crs")
                .help("Target CRS (e.g. EPSG:4326)")
                .value_name("CRS")
                .required(false),
        )
        .get_matches();

    let default_level = if matches.get_flag("verbose") { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let kit = match ProjKit::new(matches.get_one::<String>("config").map(|s| s.as_str())) {
        Ok(kit) => kit,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let factory = ProjkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &kit);
    match command_result {
        Ok(command) => {
            match command.execute() {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    error!("Command execution error: {}", e);
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
