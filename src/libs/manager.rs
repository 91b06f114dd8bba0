//! Lifecycle facade around the break scheduler.
//!
//! `TimersManager` owns the one `Scheduler` value of the process, the 1 Hz
//! driver task, and the preference store. Mutations always write the store
//! first and then apply the same change to the in-memory scheduler, so a
//! crash between the two leaves the durable state ahead of the volatile one,
//! never behind.

use crate::libs::config::{ActiveHoursConfig, BreakConfig, BreakKind, Config, NotificationPlacement};
use crate::libs::error::ConfigError;
use crate::libs::messages::Message;
use crate::libs::ports::Ports;
use crate::libs::scheduler::Scheduler;
use crate::{msg_debug, msg_info};
use anyhow::Result;
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub struct TimersManager {
    ports: Ports,
    scheduler: Option<Arc<Mutex<Scheduler>>>,
    stopped: Option<Arc<AtomicBool>>,
    driver: Option<JoinHandle<()>>,
    config: Config,
}

impl TimersManager {
    pub fn new(ports: Ports) -> Self {
        TimersManager {
            ports,
            scheduler: None,
            stopped: None,
            driver: None,
            config: Config::default(),
        }
    }

    /// Constructs the scheduler from `config`. Calling this twice is a
    /// configuration defect, not a restart mechanism.
    pub fn init(&mut self, config: Config) -> Result<(), ConfigError> {
        if self.scheduler.is_some() {
            return Err(ConfigError::AlreadyInitialized);
        }
        config.validate()?;
        let scheduler = Scheduler::new(&config, self.ports.clone())?;
        self.stopped = Some(scheduler.stopped_flag());
        self.scheduler = Some(Arc::new(Mutex::new(scheduler)));
        self.config = config;
        Ok(())
    }

    /// Spawns the periodic driver. A second call while the driver is alive
    /// is a no-op.
    pub fn start_main_loop(&mut self) -> Result<(), ConfigError> {
        let scheduler = self.scheduler.as_ref().ok_or(ConfigError::NotInitialized)?;
        if self.driver.as_ref().is_some_and(|d| !d.is_finished()) {
            return Ok(());
        }
        let scheduler = Arc::clone(scheduler);
        self.driver = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                scheduler.lock().tick();
            }
        }));
        msg_info!(Message::MainLoopStarted);
        Ok(())
    }

    /// Interrupts live workers, stops the driver, and waits for the workers
    /// to exit. Safe to call any number of times.
    pub async fn shutdown(&mut self) {
        if let Some(driver) = self.driver.take() {
            msg_info!(Message::SchedulerShuttingDown);
            driver.abort();
        }
        if let Some(stopped) = &self.stopped {
            stopped.store(true, Ordering::SeqCst);
        }
        let handles = match &self.scheduler {
            Some(scheduler) => scheduler.lock().interrupt_workers(),
            None => Vec::new(),
        };
        for handle in handles {
            if let Err(error) = handle.await {
                if error.is_panic() {
                    crate::msg_error!(Message::SchedulerTaskPanicked(error.to_string()));
                }
            }
        }
    }

    // ── Mutation API: store first, then in-memory ────────────────────

    pub fn set_break_enabled(&mut self, kind: BreakKind, enabled: bool) -> Result<()> {
        let mut break_config = self.config.break_config(kind);
        break_config.enabled = enabled;
        self.config.set_break_config(break_config);
        self.config.save()?;

        if let Some(scheduler) = &self.scheduler {
            scheduler.lock().set_break_enabled(kind, enabled, Utc::now().timestamp());
        }
        let state = if enabled { Message::BreakEnabled(kind.to_string()) } else { Message::BreakDisabled(kind.to_string()) };
        msg_debug!(state);
        Ok(())
    }

    pub fn save_break_config(&mut self, break_config: BreakConfig) -> Result<()> {
        break_config.validate()?;
        self.config.set_break_config(break_config.clone());
        self.config.save()?;

        if let Some(scheduler) = &self.scheduler {
            scheduler.lock().apply_break_config(break_config, Utc::now().timestamp())?;
        }
        Ok(())
    }

    pub fn save_active_hours(&mut self, active_hours: ActiveHoursConfig) -> Result<()> {
        active_hours.validate()?;
        self.config.active_hours = active_hours.clone();
        self.config.save()?;

        if let Some(scheduler) = &self.scheduler {
            scheduler.lock().apply_active_hours(active_hours)?;
        }
        Ok(())
    }

    pub fn set_active_hours_enabled(&mut self, enabled: bool) -> Result<()> {
        self.config.active_hours.enabled = enabled;
        self.config.save()?;

        if let Some(scheduler) = &self.scheduler {
            scheduler.lock().set_active_hours_enabled(enabled);
        }
        Ok(())
    }

    pub fn save_notification_placement(&mut self, placement: NotificationPlacement) -> Result<()> {
        self.config.placement = placement;
        self.config.save()?;
        msg_debug!(Message::PlacementSaved(placement.to_string()));
        Ok(())
    }

    /// Pauses due checks without tearing anything down; timers keep their
    /// distance to the next break while paused.
    pub fn pause_main_loop(&self) {
        if let Some(stopped) = &self.stopped {
            stopped.store(true, Ordering::SeqCst);
            msg_info!(Message::MainLoopPaused);
        }
    }

    pub fn resume_main_loop(&self) {
        if let Some(stopped) = &self.stopped {
            stopped.store(false, Ordering::SeqCst);
            msg_info!(Message::MainLoopResumed);
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_break_happening(&self) -> bool {
        self.scheduler.as_ref().is_some_and(|s| s.lock().is_break_happening())
    }

    pub fn is_main_loop_stopped(&self) -> bool {
        match &self.stopped {
            Some(stopped) => stopped.load(Ordering::SeqCst),
            None => true,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared scheduler handle, for the watch loop's diagnostics and tests.
    pub fn scheduler(&self) -> Option<Arc<Mutex<Scheduler>>> {
        self.scheduler.clone()
    }
}
