use clap::Parser;
use osm_route::sdk::{
    command::{Command, CommandError, HELP},
    config::AppConfig,
    navigation::{
        controller::{DEFAULT_END, DEFAULT_START},
        NavigationController, RouteForm,
    },
    routing::{Geocoder, NominatimGeocoder, OsrmRouter, Profile, Router},
    util::log::init_logging,
    view::{RouteView, ViewModel},
};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::path::{Path, PathBuf};

/// Draw a route between two places on an OpenStreetMap map, step by step
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Start address (e.g., "서울역")
    #[arg(short, long, default_value = DEFAULT_START)]
    start: String,

    /// End address (e.g., "광화문")
    #[arg(short, long, default_value = DEFAULT_END)]
    end: String,

    /// Travel mode
    #[arg(short, long, value_enum, default_value_t = Profile::Driving)]
    profile: Profile,

    /// Where the HTML map page is written
    #[arg(long, default_value = "route_map.html")]
    map: PathBuf,

    /// Route the given addresses once, print the result and exit
    #[arg(long)]
    once: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    log::debug!("Using configuration {:?}", config);

    let geocoder = NominatimGeocoder::new(&config.geocoder)?;
    let router = OsrmRouter::new(&config.router)?;
    let form = RouteForm {
        start_addr: cli.start.clone(),
        end_addr: cli.end.clone(),
        profile: cli.profile,
    };
    let mut controller = NavigationController::with_form(geocoder, router, form);

    if cli.once {
        controller.submit()?;
        show(&controller, &cli.map);
        return Ok(());
    }

    repl(&mut controller, &cli.map)
}

fn repl<G: Geocoder, R: Router>(
    controller: &mut NavigationController<G, R>,
    map_path: &Path,
) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;
    println!("{HELP}\n");
    print_form(controller.form());

    loop {
        let line = match editor.readline("route ❯ ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        editor.add_history_entry(line.as_str())?;

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        let refresh = command.changes_view();

        match command {
            Command::SetStart(addr) => controller.set_start_addr(addr),
            Command::SetEnd(addr) => controller.set_end_addr(addr),
            Command::SetProfile(profile) => controller.set_profile(profile),
            Command::Go => {
                println!("Geocoding addresses and computing the route...");
                if let Err(e) = controller.submit() {
                    println!("❌ {e}");
                }
            }
            Command::Coords { start, end } => {
                let profile = controller.form().profile;
                if let Err(e) = controller.route_coordinates(start, end, profile) {
                    println!("❌ {e}");
                }
            }
            Command::Previous => controller.previous(),
            Command::First => controller.first(),
            Command::Next => controller.next(),
            Command::Reset => controller.reset(),
            Command::Roads => print_roads(&controller.render()),
            Command::Map(_) if !controller.has_route() => {
                println!("No route yet, nothing to draw.")
            }
            Command::Map(path) => {
                if let ViewModel::Ready(view) = controller.render() {
                    export_map(&view, path.as_deref().unwrap_or(map_path));
                }
            }
            Command::Form => print_form(controller.form()),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }

        if refresh {
            show(controller, map_path);
        }
    }

    Ok(())
}

fn show<G: Geocoder, R: Router>(controller: &NavigationController<G, R>, map_path: &Path) {
    let view = controller.render();
    println!("{view}");
    if let ViewModel::Ready(route) = &view {
        export_map(route, map_path);
    }
}

fn export_map(view: &RouteView, path: &Path) {
    let title = format!("{} → {}", view.start_label, view.end_label);
    match view.map.write_html(path, &title) {
        Ok(()) => log::info!("🗺️ Map written to {}", path.display()),
        Err(e) => log::error!("Failed to write map to {}: {}", path.display(), e),
    }
}

fn print_form(form: &RouteForm) {
    println!(
        "Start: {} | End: {} | Profile: {}",
        form.start_addr, form.end_addr, form.profile
    );
}

fn print_roads(view: &ViewModel) {
    match view {
        ViewModel::Ready(route) if !route.road_names.is_empty() => {
            println!("{} named roads along the route:", route.road_names.len());
            for name in &route.road_names {
                println!("  - {name}");
            }
        }
        ViewModel::Ready(_) => {
            println!("This route has too few road names, the map data has gaps here.")
        }
        ViewModel::Idle { .. } => println!("No route yet."),
    }
}
