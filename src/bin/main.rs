#![no_std]
#![no_main]

use esp_hal::{
    clock::CpuClock,
    delay::Delay,
    gpio::{Level, Output, OutputConfig},
};
use esp_println::{println, Printer};
use esp_backtrace as _;
use fugit::HertzU32;
use serial_blinky::{Blinker, FmtSink};

/// Rate the ROM bootloader leaves the console at
const ROM_CONSOLE_BAUD: HertzU32 = HertzU32::from_raw(115_200);

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    println!("Panic occurred: {:?}", info);
    loop {}
}

#[esp_hal::main]
fn main() -> ! {
    #[cfg(feature = "diagnostics")]
    esp_println::logger::init_logger(log::LevelFilter::Debug);

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let console = FmtSink::new(Printer, ROM_CONSOLE_BAUD);

    // Built-in indicator LED (GPIO10); its level before the first write is don't-care
    let blinker = match Blinker::setup(
        console,
        || Ok(Output::new(peripherals.GPIO10, Level::Low, OutputConfig::default())),
        Delay::new(),
    ) {
        Ok(blinker) => blinker,
        Err(err) => panic!("setup failed: {}", err),
    };

    match blinker.run() {
        Ok(never) => match never {},
        Err(err) => panic!("blinker halted: {}", err),
    }
}
