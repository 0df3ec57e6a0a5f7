#![no_main]
#![no_std]

use lib as _;

use lib::clock::StepClock;
use lib::config::{LCD_GEOMETRY, PWM_FREQUENCY_HZ, STEP_TICK_HZ};
use lib::control::Controller;
use lib::hw::{
    init_clock, init_lcd, init_pwm, Adc, AdcConfig, AdcConverter, HwController, LcdInterface,
    StepTimer, StopButton,
};
use lib::sampler::Sampler;
use lib::state::Shared;
use lib::stop::StopToggle;
use rtic::app;
use stm32g0xx_hal::delay::DelayExt;
use stm32g0xx_hal::gpio::{GpioExt, Speed};
use stm32g0xx_hal::time::U32Ext;

static SHARED: Shared = Shared::new();

#[app(device = stm32g0xx_hal::stm32, peripherals = true)]
const APP: () = {
    struct Resources {
        controller: HwController,
        converter: AdcConverter,
        sampler: Sampler,
        step_timer: StepTimer,
        step_clock: StepClock,
        stop_button: StopButton,
        stop_toggle: StopToggle,
    }

    #[init]
    fn init(cx: init::Context) -> init::LateResources {
        let core: rtic::export::Peripherals = cx.core;
        let device: stm32g0xx_hal::stm32::Peripherals = cx.device;

        // Clock
        let mut rcc = init_clock(device.RCC);
        let mut delay = core.SYST.delay(&mut rcc);

        // GPIO
        let gpioa = device.GPIOA.split(&mut rcc);
        let gpiob = device.GPIOB.split(&mut rcc);
        let gpioc = device.GPIOC.split(&mut rcc);

        // LCD
        let interface = LcdInterface::new(
            gpiob.pb0.into_push_pull_output().set_speed(Speed::VeryHigh),
            gpiob.pb1.into_push_pull_output().set_speed(Speed::VeryHigh),
            gpiob.pb2.into_push_pull_output().set_speed(Speed::VeryHigh),
            gpiob.pb3.into_push_pull_output().set_speed(Speed::VeryHigh),
            gpiob.pb4.into_push_pull_output().set_speed(Speed::VeryHigh),
            gpiob.pb5.into_push_pull_output().set_speed(Speed::VeryHigh),
            gpiob.pb6.into_push_pull_output().set_speed(Speed::VeryHigh),
            gpiob.pb7.into_push_pull_output().set_speed(Speed::VeryHigh),
            gpiob.pb8.into_push_pull_output().set_speed(Speed::VeryHigh),
            gpiob.pb9.into_push_pull_output().set_speed(Speed::VeryHigh),
        );
        let display = init_lcd(
            interface,
            gpioa.pa4.into_push_pull_output(),
            gpioa.pa5.into_push_pull_output(),
            LCD_GEOMETRY,
            &mut delay,
        )
        .unwrap();

        // ADC
        let adc = Adc::new(
            device.ADC,
            AdcConfig::new(gpioa.pa0.into_analog(), gpioa.pa1.into_analog()),
            &mut rcc,
            &mut delay,
        );
        let (trigger, converter) = adc.split();

        // PWM, stop LED and button
        let pwm = init_pwm(device.TIM3, gpioa.pa6, PWM_FREQUENCY_HZ.hz(), &mut rcc);
        let stop_led = gpioa.pa7.into_push_pull_output();
        let stop_button = StopButton::new(gpioc.pc13.into_pull_up_input(), device.EXTI);

        // Step clock
        let step_timer = StepTimer::new(device.TIM6, STEP_TICK_HZ.hz(), &mut rcc);

        defmt::info!("initialized, pot2 starts at {=u16}", SHARED.pot2.read());

        init::LateResources {
            controller: Controller::new(display, stop_led, pwm, trigger),
            converter,
            sampler: Sampler::new(),
            step_timer,
            step_clock: StepClock::new(),
            stop_button,
            stop_toggle: StopToggle::new(),
        }
    }

    #[idle(resources = [controller, step_timer])]
    fn idle(mut cx: idle::Context) -> ! {
        cx.resources.step_timer.lock(|timer: &mut StepTimer| {
            timer.start();
        });
        let controller: &mut HwController = cx.resources.controller;
        loop {
            controller.poll(&SHARED).unwrap();
        }
    }

    #[task(binds = EXTI4_15, priority = 2, resources = [stop_button, stop_toggle])]
    fn exti4_15(cx: exti4_15::Context) {
        let button: &mut StopButton = cx.resources.stop_button;
        let toggle: &mut StopToggle = cx.resources.stop_toggle;

        button.unpend();
        toggle.on_edge(&SHARED);
    }

    #[task(binds = ADC, priority = 1, resources = [converter, sampler])]
    fn adc(cx: adc::Context) {
        let converter: &mut AdcConverter = cx.resources.converter;
        let sampler: &mut Sampler = cx.resources.sampler;

        sampler.on_conversion_complete(converter, &SHARED);
        converter.unpend();
    }

    #[task(binds = TIM6, priority = 1, resources = [step_timer, step_clock])]
    fn tim6(cx: tim6::Context) {
        let timer: &mut StepTimer = cx.resources.step_timer;
        let clock: &mut StepClock = cx.resources.step_clock;

        timer.unpend();
        lib::advance_uptime();
        clock.tick(&SHARED);
    }
};
