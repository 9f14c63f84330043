use std::io::{self, Write};
use once_cell::sync::OnceCell;
use log::{
    LevelFilter,
    Metadata,
    Record
};

static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;
struct ConsoleLogger;
impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!(
                "[{}] [{}] {}",
                record.target(),
                record.level(),
                record.args()
            );
        }
    }
    fn flush(&self) {
        io::stdout().flush().unwrap();
    }
}

static INSTALLED: OnceCell<()> = OnceCell::new();

pub(crate) fn setup(level: LevelFilter) {
    INSTALLED.get_or_init(|| {
        _ = log::set_logger(&CONSOLE_LOGGER);
    });
    log::set_max_level(level);
}
