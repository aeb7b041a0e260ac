use std::fs;

use pbr_logging::{log_error, log_info, log_verbose, set_logger, LogCategory, Logger};
use pbr_math::{f32aabb3, Vec3, AABB3};

mod settings;
use settings::{Settings, SETTINGS_FILE};

pub const LOG_CAT : LogCategory = LogCategory::new("Main");

static LOGGER : Logger = Logger::new();

fn load_settings() -> Settings {
    match fs::read_to_string(SETTINGS_FILE) {
        Ok(toml) => Settings::load(&toml).unwrap_or_default(),
        Err(_) => Settings::default(),
    }
}

fn setup_logging(settings: &Settings) {
    LOGGER.set_max_level(settings.log_level);
    LOGGER.set_always_flush(settings.always_flush);
    LOGGER.set_log_to_console(settings.log_to_console);

    if let Some(path) = &settings.log_file {
        match fs::File::create(path) {
            Ok(file) => if LOGGER.add_writer(Box::new(file)).is_err() {
                log_error!(LOG_CAT, setup_logging, "No free writer slot for log file '{}'", path);
            },
            Err(err) => {
                log_error!(LOG_CAT, setup_logging, "Failed to create log file '{}', err: {}", path, err);
            },
        }
    }
}

fn main() {
    set_logger(&LOGGER);
    // Messages while loading the settings go to the console with the default configuration
    LOGGER.set_always_flush(true);

    let settings = load_settings();
    setup_logging(&settings);
    log_verbose!(LOG_CAT, "Settings: {:?}", settings);

    let bounds : f32aabb3 = AABB3::new(Vec3::new(-7.0, -5.0, -3.0), Vec3::new(-3.0, -1.0, 1.0));
    log_verbose!(LOG_CAT, "Bounds: {}", bounds);

    let (center, radius) = bounds.bounding_sphere();
    println!("{center}");
    println!("{radius}");
    log_info!(LOG_CAT, "Bounding sphere of {} has radius {}", bounds, radius);

    LOGGER.flush();
}
