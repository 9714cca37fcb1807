use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;
use transit_catalog::PlanetRecord;
use transit_model::{
    APPROACH_PHASE_OFFSET_RAD, TransitModel, TransitSample, next_transit_time, scale_info,
    scaled_radii, transit_depth, transit_duration,
};
use transit_search::{
    LightCurveConfig, TransitEvent, TransitReport, TransitSearchConfig, compare, diagnose,
    next_transit, sample, search_transits, summarize, transit_report,
};
use transit_sim::{PlotFrame, Readout, Session, SessionConfig, Slot};

#[derive(Parser)]
#[command(name = "transit", about = "Exoplanet transit light-curve CLI")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog identifiers
    List,
    /// Show a catalog entry with its derived radii and depth
    Info {
        /// Planet identifier (e.g. hd-209458b)
        id: String,
    },
    /// Evaluate a transit model at one time
    Evaluate {
        /// Planet identifier
        id: String,
        /// Time in days
        #[arg(long, default_value = "0")]
        time: f64,
        /// Model: angle-window (default) or scaled-radius
        #[arg(long, default_value = "angle-window")]
        model: String,
        /// Phase offset in radians (scaled-radius only)
        #[arg(long)]
        phase: Option<f64>,
        /// Use the π/4 approach offset (scaled-radius only)
        #[arg(long)]
        approach: bool,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Sample a light curve
    Curve {
        /// Planet identifier
        id: String,
        /// Start time in days
        #[arg(long, default_value = "0")]
        start: f64,
        /// End time in days (default: one period after start)
        #[arg(long)]
        end: Option<f64>,
        /// Step in days
        #[arg(long, default_value = "0.01")]
        step: f64,
        /// Model: angle-window (default) or scaled-radius
        #[arg(long, default_value = "angle-window")]
        model: String,
        /// Phase offset in radians (scaled-radius only)
        #[arg(long)]
        phase: Option<f64>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Summarize a light curve: sample count, in-transit count, deepest flux
    Summary {
        /// Planet identifier
        id: String,
        /// Start time in days
        #[arg(long, default_value = "0")]
        start: f64,
        /// End time in days (default: one period after start)
        #[arg(long)]
        end: Option<f64>,
        /// Step in days
        #[arg(long, default_value = "0.01")]
        step: f64,
        /// Model: angle-window (default) or scaled-radius
        #[arg(long, default_value = "angle-window")]
        model: String,
    },
    /// Physical transit duration from the real radii
    Duration {
        /// Planet identifier
        id: String,
    },
    /// Time of the next transit after a given time
    NextTransit {
        /// Planet identifier
        id: String,
        /// Time in days to search from
        #[arg(long, default_value = "0")]
        from: f64,
        /// scaled-radius (default) uses the analytic π/2 crossing;
        /// angle-window searches for the next window
        #[arg(long, default_value = "scaled-radius")]
        model: String,
        /// Phase offset in radians (scaled-radius only)
        #[arg(long)]
        phase: Option<f64>,
    },
    /// Find transit intervals in a time span
    Search {
        /// Planet identifier
        id: String,
        /// Start time in days
        #[arg(long, default_value = "0")]
        start: f64,
        /// End time in days
        #[arg(long)]
        end: f64,
        /// Model: angle-window (default) or scaled-radius
        #[arg(long, default_value = "angle-window")]
        model: String,
        /// Coarse scan step in days
        #[arg(long, default_value = "0.01")]
        step: f64,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Real-scale geometry of a planet's system
    Scale {
        /// Planet identifier
        id: String,
    },
    /// Compare period, duration and depth across planets
    Compare {
        /// Planet identifiers (default: hd-209458b kepler-10b kepler-7b)
        ids: Vec<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Probe a model at eighths of an orbit and summarize one period
    Diagnose {
        /// Planet identifier
        id: String,
        /// Model: scaled-radius (default) or angle-window
        #[arg(long, default_value = "scaled-radius")]
        model: String,
    },
    /// Light-curve plot data for two planets at one time
    Frame {
        /// First planet identifier
        #[arg(long)]
        first: Option<String>,
        /// Second planet identifier
        #[arg(long)]
        second: Option<String>,
        /// Current time in days
        #[arg(long, default_value = "0")]
        time: f64,
        /// Superimpose the curves instead of stacking them
        #[arg(long)]
        overlay: bool,
        /// Emit JSON (includes every sample)
        #[arg(long)]
        json: bool,
    },
    /// Run the simulation clock in real time and print readouts
    Play {
        /// Session configuration JSON file
        #[arg(long)]
        config: Option<PathBuf>,
        /// First planet identifier (overrides the config file)
        #[arg(long)]
        first: Option<String>,
        /// Second planet identifier (overrides the config file)
        #[arg(long)]
        second: Option<String>,
        /// Speed multiplier (overrides the config file)
        #[arg(long)]
        speed: Option<f64>,
        /// Wall-clock seconds to run
        #[arg(long, default_value = "2")]
        seconds: f64,
        /// Print readouts every N ticks
        #[arg(long, default_value = "10")]
        every: usize,
        /// Emit JSON lines
        #[arg(long)]
        json: bool,
    },
}

const DEFAULT_COMPARE_IDS: [&str; 3] = ["hd-209458b", "kepler-10b", "kepler-7b"];

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn require_planet(id: &str) -> PlanetRecord {
    transit_catalog::lookup(id).unwrap_or_else(|| {
        eprintln!("Unknown planet: {id}");
        eprintln!("Valid: {}", transit_catalog::list().join(", "));
        std::process::exit(1);
    })
}

fn require_model(name: &str, phase: Option<f64>) -> TransitModel {
    let model: TransitModel = name.parse().unwrap_or_else(|e: String| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    match (model, phase) {
        (TransitModel::ScaledRadius { .. }, Some(phase_offset_rad)) => {
            TransitModel::ScaledRadius { phase_offset_rad }
        }
        (TransitModel::AngleWindow, Some(_)) => {
            eprintln!("--phase applies to the scaled-radius model only");
            std::process::exit(1);
        }
        (m, None) => m,
    }
}

fn require_curve(
    planet: &PlanetRecord,
    model: TransitModel,
    config: &LightCurveConfig,
) -> Vec<TransitSample> {
    sample(planet, model, config).unwrap_or_else(|e| {
        eprintln!("Failed to sample light curve: {e}");
        std::process::exit(1);
    })
}

fn require_session(config: &SessionConfig) -> Session {
    Session::new(config).unwrap_or_else(|e| {
        eprintln!("Failed to start session: {e}");
        std::process::exit(1);
    })
}

fn require_frame(session: &Session) -> PlotFrame {
    session.plot_frame().unwrap_or_else(|e| {
        eprintln!("Failed to build plot frame: {e}");
        std::process::exit(1);
    })
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn print_json_line<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn print_sample(s: &TransitSample) {
    println!(
        "{:>12.4}  {:>10.6}  {:>8.3}°  {}",
        s.time_days,
        s.flux,
        s.angle_deg,
        if s.is_transiting { "TRANSIT" } else { "-" }
    );
}

fn print_event(label: &str, ev: &TransitEvent) {
    println!(
        "{}: ingress {:.6} d  mid {:.6} d  egress {:.6} d",
        label, ev.ingress_days, ev.mid_days, ev.egress_days
    );
    println!(
        "  duration: {:.4} h  min flux: {:.6}{}",
        ev.duration_days() * 24.0,
        ev.min_flux,
        if ev.complete { "" } else { "  (cut by span)" }
    );
}

fn print_report(r: &TransitReport) {
    println!(
        "{:<12} period {:>8.4} d  duration {:>7.3} h  depth {:>8.3}%",
        r.name, r.period_days, r.duration_hours, r.depth_percent
    );
}

fn print_readout(r: &Readout) {
    println!(
        "[{:?}] {} t={:.2}d  x={:.5} AU  y={:.5} AU  angle={:.2}°  flux={:.6}{}",
        r.slot,
        r.planet_name,
        r.time_days,
        r.x_au,
        r.y_au,
        r.angle_deg,
        r.flux,
        if r.is_transiting { "  TRANSIT" } else { "" }
    );
}

fn print_frame(frame: &PlotFrame) {
    println!(
        "Window: {:.3} .. {:.3} d ({:.3} d)",
        frame.window.start_days, frame.window.end_days, frame.window.range_days
    );
    println!(
        "Flux axis: {:.4} .. {:.4}",
        frame.flux_axis.min, frame.flux_axis.max
    );
    println!("Layout: {:?}", frame.layout);
    let ticks: Vec<String> = frame.time_ticks.iter().map(|t| format!("{t:.1}")).collect();
    println!("Time ticks: {}", ticks.join("  "));
    let ticks: Vec<String> = frame.flux_ticks.iter().map(|f| format!("{f:.4}")).collect();
    println!("Flux ticks: {}", ticks.join("  "));
    match frame.cursor {
        Some(c) => println!("Cursor: t={:.2}d at {:.1}%", frame.current_time_days, c * 100.0),
        None => println!("Cursor: off plot"),
    }
    if frame.curves.is_empty() {
        println!("Select planets to see light curves");
    }
    for curve in &frame.curves {
        let min_flux = curve
            .samples
            .iter()
            .map(|s| s.flux)
            .fold(f64::INFINITY, f64::min);
        let in_transit = curve.samples.iter().filter(|s| s.is_transiting).count();
        println!(
            "  [{:?}] {}: {} samples, {} in transit, min flux {:.6}",
            curve.slot,
            curve.planet_name,
            curve.samples.len(),
            in_transit,
            min_flux
        );
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List => {
            for p in transit_catalog::all() {
                println!("{:<12} {}", p.id, p.name);
            }
        }

        Commands::Info { id } => {
            let p = require_planet(&id);
            let scale = scale_info(&p);
            println!("{} ({})", p.name, p.id);
            if let Some(description) = p.description {
                println!("  {description}");
            }
            println!(
                "  Planet radius: {:.2} R⊕ ({:.0} km, {:.3e} AU)",
                p.radius_planet_earth, scale.planet_radius_km, scale.planet_radius_au
            );
            println!(
                "  Star radius:   {:.2} R☉ ({:.0} km, {:.3e} AU)",
                p.radius_star_solar, scale.star_radius_km, scale.star_radius_au
            );
            println!("  Period:        {:.4} d", p.period_days);
            println!("  Semi-major axis: {:.4} AU", p.semi_major_axis_au);
            println!("  Rp/Rs:         {:.4}", p.radius_ratio());
            println!("  Transit depth: {:.4}%", transit_depth(&p) * 100.0);
        }

        Commands::Evaluate {
            id,
            time,
            model,
            phase,
            approach,
            json,
        } => {
            let p = require_planet(&id);
            let phase = if approach {
                Some(APPROACH_PHASE_OFFSET_RAD)
            } else {
                phase
            };
            let model = require_model(&model, phase);
            let s = model.evaluate(&p, time);
            if json {
                print_json(&s);
            } else {
                println!("{} ({}) at t={:.4}d", p.name, model, time);
                println!("  Angle: {:.4}°", s.angle_deg);
                println!("  Flux: {:.6}", s.flux);
                println!("  Transiting: {}", s.is_transiting);
            }
        }

        Commands::Curve {
            id,
            start,
            end,
            step,
            model,
            phase,
            json,
        } => {
            let p = require_planet(&id);
            let model = require_model(&model, phase);
            let end = end.unwrap_or(start + p.period_days);
            let config = LightCurveConfig::new(start, end).with_step(step);
            let curve = require_curve(&p, model, &config);
            if json {
                print_json(&curve);
            } else {
                println!("{:>12}  {:>10}  {:>9}  transit", "time (d)", "flux", "angle");
                for s in &curve {
                    print_sample(s);
                }
            }
        }

        Commands::Summary {
            id,
            start,
            end,
            step,
            model,
        } => {
            let p = require_planet(&id);
            let model = require_model(&model, None);
            let end = end.unwrap_or(start + p.period_days);
            let config = LightCurveConfig::new(start, end).with_step(step);
            let curve = require_curve(&p, model, &config);
            match summarize(&curve) {
                Some(s) => {
                    println!("{} ({}) over [{:.4}, {:.4}] d", p.name, model, start, end);
                    println!("  Samples: {}", s.sample_count);
                    println!("  In transit: {}", s.transiting_count);
                    println!("  Min flux: {:.6}", s.min_flux);
                    println!("  Observed depth: {:.4}%", s.observed_depth * 100.0);
                }
                None => println!("Empty light curve (start > end)"),
            }
        }

        Commands::Duration { id } => {
            let p = require_planet(&id);
            let days = transit_duration(&p);
            println!("{}: {:.4} h ({:.6} d)", p.name, days * 24.0, days);
        }

        Commands::NextTransit {
            id,
            from,
            model,
            phase,
        } => {
            let p = require_planet(&id);
            match require_model(&model, phase) {
                TransitModel::ScaledRadius { phase_offset_rad } => {
                    let t = next_transit_time(&p, from, phase_offset_rad);
                    println!(
                        "Next π/2 crossing of {} after {:.4}d: {:.6}d (in {:.4}d)",
                        p.name,
                        from,
                        t,
                        t - from
                    );
                }
                model => match next_transit(&p, model, from, &TransitSearchConfig::default()) {
                    Ok(Some(ev)) => print_event("Next transit", &ev),
                    Ok(None) => println!("No transit within two periods"),
                    Err(e) => {
                        eprintln!("Search failed: {e}");
                        std::process::exit(1);
                    }
                },
            }
        }

        Commands::Search {
            id,
            start,
            end,
            model,
            step,
            json,
        } => {
            let p = require_planet(&id);
            let model = require_model(&model, None);
            let config = TransitSearchConfig {
                step_size_days: step,
                ..Default::default()
            };
            let events = search_transits(&p, model, start, end, &config).unwrap_or_else(|e| {
                eprintln!("Search failed: {e}");
                std::process::exit(1);
            });
            if json {
                print_json(&events);
            } else if events.is_empty() {
                println!("No transits of {} ({}) in [{}, {}]", p.name, model, start, end);
            } else {
                println!("Found {} transit(s):", events.len());
                for (i, ev) in events.iter().enumerate() {
                    print_event(&format!("  #{}", i + 1), ev);
                }
            }
        }

        Commands::Scale { id } => {
            let p = require_planet(&id);
            let s = scale_info(&p);
            let scaled = scaled_radii(&p);
            println!("{} real-scale geometry", p.name);
            println!("  Star radius:   {:.6} AU ({:.0} km)", s.star_radius_au, s.star_radius_km);
            println!(
                "  Planet radius: {:.6} AU ({:.0} km)",
                s.planet_radius_au, s.planet_radius_km
            );
            println!("  Orbit radius:  {:.4} AU", s.orbit_radius_au);
            println!("  Orbit / (Rs + Rp): {:.1}", s.scale_ratio);
            println!(
                "  Scaled radii: star {:.6} AU, planet {:.6} AU",
                scaled.star_radius_au, scaled.planet_radius_au
            );
        }

        Commands::Compare { ids, json } => {
            let ids: Vec<&str> = if ids.is_empty() {
                DEFAULT_COMPARE_IDS.to_vec()
            } else {
                ids.iter().map(String::as_str).collect()
            };
            let reports = compare(&ids);
            if json {
                print_json(&reports);
            } else {
                for r in &reports {
                    print_report(r);
                }
            }
        }

        Commands::Diagnose { id, model } => {
            let p = require_planet(&id);
            let model = require_model(&model, None);
            let d = diagnose(&p, model).unwrap_or_else(|e| {
                eprintln!("Diagnosis failed: {e}");
                std::process::exit(1);
            });
            print_report(&transit_report(&p));
            println!("Probes at P/8 steps ({model}):");
            for s in &d.probes {
                print_sample(s);
            }
            match d.curve_summary {
                Some(s) => println!(
                    "One period at 0.1 d: {} samples, {} in transit, min flux {:.6}",
                    s.sample_count, s.transiting_count, s.min_flux
                ),
                None => println!("One period at 0.1 d: no samples"),
            }
        }

        Commands::Frame {
            first,
            second,
            time,
            overlay,
            json,
        } => {
            let config = SessionConfig {
                first_planet: first,
                second_planet: second,
                start_time_days: time,
                overlay,
                ..Default::default()
            };
            let session = require_session(&config);
            let frame = require_frame(&session);
            if json {
                print_json(&frame);
            } else {
                print_frame(&frame);
            }
        }

        Commands::Play {
            config,
            first,
            second,
            speed,
            seconds,
            every,
            json,
        } => {
            let mut session_config = match config {
                Some(path) => SessionConfig::load(&path).unwrap_or_else(|e| {
                    eprintln!("Failed to load {}: {e}", path.display());
                    std::process::exit(1);
                }),
                None => SessionConfig::default(),
            };
            if first.is_some() {
                session_config.first_planet = first;
            }
            if second.is_some() {
                session_config.second_planet = second;
            }
            if let Some(speed) = speed {
                session_config.speed = speed;
            }
            let duration = Duration::try_from_secs_f64(seconds).unwrap_or_else(|e| {
                eprintln!("Invalid --seconds {seconds}: {e}");
                std::process::exit(1);
            });
            let every = every.max(1);

            let mut session = require_session(&session_config);
            session.play();
            let mut applied = 0usize;
            let ticks = session.run_with(duration, |session| {
                applied += 1;
                if applied % every != 0 {
                    return;
                }
                for slot in Slot::ALL {
                    if let Some(r) = session.readout(slot) {
                        if json {
                            print_json_line(&r);
                        } else {
                            print_readout(&r);
                        }
                    }
                }
            });
            session.pause();
            if !json {
                println!(
                    "{} ticks, t={:.2}d",
                    ticks,
                    session.clock().current_time_days()
                );
            }
        }
    }
}
