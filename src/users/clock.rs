use time::OffsetDateTime;

pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Test clock that advances one second per reading.
#[cfg(test)]
pub(crate) struct TickingClock(parking_lot::Mutex<OffsetDateTime>);

#[cfg(test)]
impl TickingClock {
    pub(crate) fn starting_at(start: OffsetDateTime) -> Self {
        Self(parking_lot::Mutex::new(start))
    }
}

#[cfg(test)]
impl Clock for TickingClock {
    fn now(&self) -> OffsetDateTime {
        let mut t = self.0.lock();
        let now = *t;
        *t += time::Duration::SECOND;
        now
    }
}
