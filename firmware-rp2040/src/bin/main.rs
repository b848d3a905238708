#![no_std]
#![no_main]

use defmt::{debug, info};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc};
use embassy_rp::gpio::{Flex, Input, Pull};
use embassy_time::{Duration, Ticker, Timer};
use jog_pendant_rp2040::{
    AdcJoystick, ConsoleCommandSink, ConsoleIntake, EncoderCounter, FeedOverrideCell,
    FeedOverrideScaler, JogPendant, OpenDrainLine, OverrideConfig, PendantConfig, SelectionCell,
    SwitchGroup,
};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

/// Pendant configuration. Would come from the controller's config store; a
/// disabled module spawns nothing.
const PENDANT_CONFIG: PendantConfig = PendantConfig {
    enable: true,
    feedrade_percentage: None,
};

const OVERRIDE_CONFIG: OverrideConfig = OverrideConfig {
    enable: true,
    data_source: "joystick_x",
    min: 0.2,
    max: 1.2,
};

/// Interrupt-to-loop encoder handoff.
static ENCODER: EncoderCounter = EncoderCounter::new();

/// Scan-tick-to-loop selection handoffs.
static AXIS_SELECTION: SelectionCell = SelectionCell::new();
static FEED_SELECTION: SelectionCell = SelectionCell::new();

/// Command intake standing in for the controller's console line channel.
static CONSOLE_INTAKE: ConsoleIntake = ConsoleIntake::new();

/// Feed-override factor shared with the motion planner.
static FEED_OVERRIDE: FeedOverrideCell = FeedOverrideCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("jog pendant starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    let Some(pendant) = JogPendant::build(&PENDANT_CONFIG, &ENCODER, &AXIS_SELECTION, &FEED_SELECTION)
    else {
        info!("jog pendant disabled by configuration");
        return;
    };

    // Selector banks; an unconfigured line would simply be None
    let axis_group = SwitchGroup::new([
        Some(OpenDrainLine::new(Flex::new(p.PIN_2))),
        Some(OpenDrainLine::new(Flex::new(p.PIN_3))),
        Some(OpenDrainLine::new(Flex::new(p.PIN_4))),
    ]);
    let feed_group = SwitchGroup::new([
        Some(OpenDrainLine::new(Flex::new(p.PIN_5))),
        Some(OpenDrainLine::new(Flex::new(p.PIN_6))),
        Some(OpenDrainLine::new(Flex::new(p.PIN_7))),
    ]);

    // Hand-wheel channels; the decoder only runs with both present
    let channel_a = Input::new(p.PIN_10, Pull::Up);
    let channel_b = Input::new(p.PIN_11, Pull::Up);

    spawner.spawn(encoder_task(channel_a, channel_b)).unwrap();
    spawner.spawn(scan_task(axis_group, feed_group)).unwrap();
    spawner
        .spawn(pendant_task(
            pendant,
            ConsoleCommandSink::new(&CONSOLE_INTAKE),
        ))
        .unwrap();
    spawner.spawn(console_task()).unwrap();

    if let Some(scaler) = FeedOverrideScaler::from_config(&OVERRIDE_CONFIG) {
        let adc = Adc::new_blocking(p.ADC, adc::Config::default());
        let channel = adc::Channel::new_pin(p.PIN_26, Pull::None);
        let joystick = AdcJoystick::new(adc, channel, OVERRIDE_CONFIG.data_source);
        spawner.spawn(override_task(scaler, joystick)).unwrap();
    } else {
        info!("feed override disabled by configuration");
    }

    info!("jog pendant initialized");
}

/// Count falling edges of channel A, direction from channel B.
#[embassy_executor::task]
async fn encoder_task(mut channel_a: Input<'static>, channel_b: Input<'static>) {
    loop {
        channel_a.wait_for_falling_edge().await;
        ENCODER.record_edge(channel_b.is_high());
    }
}

/// Scan both selector banks at a fixed 20 Hz cadence.
#[embassy_executor::task]
async fn scan_task(
    mut axis_group: SwitchGroup<OpenDrainLine<'static>, 3>,
    mut feed_group: SwitchGroup<OpenDrainLine<'static>, 3>,
) {
    let mut ticker = Ticker::every(Duration::from_hz(20));
    loop {
        ticker.next().await;
        axis_group.scan(&AXIS_SELECTION);
        feed_group.scan(&FEED_SELECTION);
    }
}

/// The cooperative main loop: poll the pendant, log what it observed.
#[embassy_executor::task]
async fn pendant_task(mut pendant: JogPendant<'static>, mut sink: ConsoleCommandSink) {
    loop {
        let report = pendant.poll(&mut sink);

        if let Some(selection) = report.axis_changed {
            info!("axis selection: {}", selection);
        }
        if let Some(selection) = report.feed_changed {
            info!("feed tier selection: {}", selection);
        }
        if let Some(update) = report.encoder {
            info!("encoder = {}, delta {}", update.position, update.delta);
        }

        Timer::after_millis(1).await;
    }
}

/// Map the joystick to a feed factor at a fixed 10 Hz cadence.
#[embassy_executor::task]
async fn override_task(mut scaler: FeedOverrideScaler, mut joystick: AdcJoystick<'static>) {
    let mut ticker = Ticker::every(Duration::from_hz(10));
    loop {
        ticker.next().await;
        let mut motion = &FEED_OVERRIDE;
        scaler.tick(&mut joystick, &mut motion);
    }
}

/// Drain the command intake in place of the controller's console parser.
#[embassy_executor::task]
async fn console_task() {
    loop {
        let command = CONSOLE_INTAKE.receive().await;
        // Replies are discarded; the jog pipeline never reads them
        debug!("console intake: {=str}", command.as_str());
    }
}
