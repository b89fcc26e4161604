//! Simulated sorting line.
//!
//! Demonstrates building a line from TOML configuration over embedded-hal
//! pins and running a full batch with the status panel attached.
//!
//! The hardware is simulated in-process: parts reach the optical sensor a
//! few polls after each eject, the converter replays a fixed list of raw
//! counts, and delays only advance a virtual clock.
//!
//! Run with: `cargo run --example simulated_line`

use std::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use cylinder_sort::io::AnalogChannel;
use cylinder_sort::{
    parse_config, PinActuators, PinSensors, ScaledColorSensor, SortLine, StatusDisplay,
    StatusPanel,
};

const LINE_CONFIG: &str = r#"
cycles = 6
tick_us = 1000

[timing]
poll = 5
beam_timeout = 2000
"#;

/// Raw 12-bit counts. Scaled, they read 200, 800, 1100, 550, 1150 and 300:
/// silver, purple, blue, between bands, blue, silver.
const RAW_COUNTS: [u16; 6] = [160, 640, 880, 440, 920, 240];

/// Input pin that goes high after a fixed number of reads, then re-arms.
struct ArrivingPart {
    polls: u32,
    countdown: u32,
}

impl ArrivingPart {
    fn new(polls: u32) -> Self {
        Self { polls, countdown: polls }
    }
}

impl ErrorType for ArrivingPart {
    type Error = Infallible;
}

impl InputPin for ArrivingPart {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if self.countdown == 0 {
            self.countdown = self.polls;
            return Ok(true);
        }
        self.countdown -= 1;
        Ok(false)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

/// Input pin held at a fixed level.
struct Fixed(bool);

impl ErrorType for Fixed {
    type Error = Infallible;
}

impl InputPin for Fixed {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0)
    }
}

/// Output pin that remembers its level.
#[derive(Default)]
struct Latch(bool);

impl ErrorType for Latch {
    type Error = Infallible;
}

impl OutputPin for Latch {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0 = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0 = true;
        Ok(())
    }
}

/// Converter replaying a fixed list of counts.
struct ReplayAdc {
    counts: std::vec::IntoIter<u16>,
}

impl AnalogChannel for ReplayAdc {
    type Error = &'static str;

    fn select(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn convert(&mut self) -> Result<u16, Self::Error> {
        self.counts.next().ok_or("no sample")
    }

    fn release(&mut self) {
        println!("[adc] released");
    }
}

/// Delay that advances a virtual clock instead of sleeping.
#[derive(Default)]
struct VirtualClock {
    elapsed_us: u64,
}

impl DelayNs for VirtualClock {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_us += u64::from(ns / 1000);
    }

    fn delay_us(&mut self, us: u32) {
        self.elapsed_us += u64::from(us);
    }
}

/// Prints text draws; indicator glyphs are skipped.
struct Console;

impl StatusDisplay for Console {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Self::Error> {
        println!("[display] ----------------");
        Ok(())
    }

    fn text(&mut self, text: &str, x: u8, y: u8) -> Result<(), Self::Error> {
        println!("[display] ({:>2},{:>2}) {}", x, y, text);
        Ok(())
    }

    fn circle(&mut self, _x: u8, _y: u8, _r: u8, _filled: bool, _highlighted: bool) -> Result<(), Self::Error> {
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

fn main() -> cylinder_sort::Result<()> {
    println!("=== Simulated Sorting Line ===\n");

    let config = parse_config(LINE_CONFIG)?;
    println!(
        "Config: {} parts, {} us ticks, beam timeout {:?}",
        config.cycles.get(),
        config.tick_us,
        config.timing.beam_timeout
    );

    let inputs = PinSensors::new(ArrivingPart::new(3), Fixed(true), Fixed(false), Fixed(false));
    let outputs = PinActuators::new(
        Latch::default(),
        Latch::default(),
        Latch::default(),
        Latch::default(),
        Latch::default(),
    );
    let adc = ReplayAdc {
        counts: RAW_COUNTS.to_vec().into_iter(),
    };

    let line = SortLine::builder()
        .inputs(inputs)
        .outputs(outputs)
        .color_sensor(ScaledColorSensor::new(adc, config.sensor))
        .delay(VirtualClock::default())
        .observer(StatusPanel::new(Console))
        .config(config)
        .build()?;

    println!("State: {}\n", line.state_name());
    let (line, summary) = line.run_configured()?;
    println!("\nState: {}", line.state_name());

    println!("\n=== Summary ===");
    println!("Parts sorted:  {}", summary.completed);
    println!("  silver:      {}", summary.silver);
    println!("  purple:      {}", summary.purple);
    println!("  blue:        {}", summary.blue);
    println!("  unclassified:{}", summary.unclassified);
    println!("Read failures: {}", summary.sensor_failures);

    let (_, outputs, _, clock, _) = line.into_parts();
    let (conveyor, punch, diverter, _, _) = outputs.release();
    println!(
        "Final outputs: conveyor={} punch={} diverter={}",
        conveyor.0, punch.0, diverter.0
    );
    println!("Simulated time: {:.2} s", clock.elapsed_us as f64 / 1_000_000.0);

    Ok(())
}
