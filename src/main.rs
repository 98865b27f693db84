// Birthday Countdown
// Main entry point

use birthday_countdown::services::clock::SystemClock;
use birthday_countdown::services::settings::SettingsService;
use birthday_countdown::ui_egui::BirthdayApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Birthday Countdown");

    let settings = SettingsService::at_default_location().load_or_default();
    let options = BirthdayApp::native_options(&settings);

    eframe::run_native(
        "Birthday Countdown",
        options,
        Box::new(move |cc| Ok(Box::new(BirthdayApp::new(cc, settings, Box::new(SystemClock))))),
    )
}
