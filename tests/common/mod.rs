#![allow(dead_code)]

use heapless::Vec;
use myrtio_lamp_driver::{BusConfig, SerialBus};

pub const LOG_SIZE: usize = 2048;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Configure(BusConfig),
    Select(u8),
    Transfer(u8, u32),
    WaitBusy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeout;

/// Bus that records every call instead of driving hardware
#[derive(Debug, Default)]
pub struct RecordingBus {
    events: Vec<Event, LOG_SIZE>,
    fail_at_wait: Option<usize>,
    waits: usize,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bus whose `wait_busy` call number `wait` (zero based) times out
    pub fn failing_at(wait: usize) -> Self {
        Self {
            fail_at_wait: Some(wait),
            ..Self::default()
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn transfers(&self) -> Vec<(u8, u32), LOG_SIZE> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Transfer(width, value) => Some((*width, *value)),
                _ => None,
            })
            .collect()
    }

    pub fn transfer_count(&self) -> usize {
        self.transfers().len()
    }

    pub fn configure_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, Event::Configure(_)))
            .count()
    }

    pub fn last_config(&self) -> Option<BusConfig> {
        self.events.iter().rev().find_map(|event| match event {
            Event::Configure(config) => Some(*config),
            _ => None,
        })
    }

    fn record(&mut self, event: Event) {
        self.events.push(event).expect("bus log overflow");
    }
}

impl SerialBus for RecordingBus {
    type Error = Timeout;

    fn configure(&mut self, config: &BusConfig) {
        self.record(Event::Configure(*config));
    }

    fn select(&mut self, slave: u8) {
        self.record(Event::Select(slave));
    }

    fn start_transfer(&mut self, width: u8, value: u32) {
        self.record(Event::Transfer(width, value));
    }

    fn wait_busy(&mut self) -> Result<(), Self::Error> {
        self.record(Event::WaitBusy);
        let index = self.waits;
        self.waits += 1;
        if self.fail_at_wait == Some(index) {
            return Err(Timeout);
        }
        Ok(())
    }
}
