//! A mug that tracks how its contents cool.
//!
//! [`ThermalMug`] wraps a [`Mug`] and records the temperature and time of the
//! most recent fill. All volume rules are the wrapped mug's; the thermal mug
//! only adds the temperature bookkeeping and the cooling queries.
//!
//! A pour received from another mug counts as a fill: when anything arrives,
//! the incoming temperature and the current time replace the last record.
//!
//! Temperatures follow Newton's law of cooling with a single
//! [`HeatLossRate`]. See [`CoolingCurve`] for the same law as a
//! [`twine_core::Model`].

mod clock;
mod cooling;
mod error;
mod heat_loss;

#[cfg(test)]
mod test_support;

pub use clock::{Clock, SystemClock};
pub use cooling::CoolingCurve;
pub use error::ThermalError;
pub use heat_loss::HeatLossRate;

use std::{fmt, ops::Deref};

use jiff::Timestamp;
use tracing::trace;
use uom::si::{
    f64::{ThermodynamicTemperature, Time, Volume},
    thermodynamic_temperature::{degree_celsius, kelvin},
    time::second,
};

use crate::{
    models::mug::{
        Beverage, FillOutcome, Mug, MugConfig, SipError, SipOutcome, TransferOutcome, transfer,
    },
    support::{constraint::NonNegative, units::volume_tolerance},
};

/// Ambient temperature assumed by [`room_temperature`], in °C.
pub const ROOM_TEMPERATURE_C: f64 = 20.0;

/// Returns a typical indoor ambient temperature.
#[must_use]
pub fn room_temperature() -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(ROOM_TEMPERATURE_C)
}

/// Temperature and time of the most recent fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRecord {
    /// Temperature of the beverage as poured.
    pub temperature: ThermodynamicTemperature,

    /// When the fill happened.
    pub timestamp: Timestamp,
}

/// A [`Mug`] whose contents cool toward ambient after each fill.
///
/// Read-only access to the wrapped mug is available through [`Deref`].
#[derive(Debug, Clone)]
pub struct ThermalMug<C = SystemClock> {
    mug: Mug,
    heat_loss: HeatLossRate,
    last_fill: Option<FillRecord>,
    clock: C,
}

impl ThermalMug {
    /// Creates an empty thermal mug timed by the system clock.
    #[must_use]
    pub fn new(config: MugConfig, heat_loss: HeatLossRate) -> Self {
        Self::with_clock(config, heat_loss, SystemClock)
    }
}

impl<C: Clock> ThermalMug<C> {
    /// Creates an empty thermal mug timed by `clock`.
    #[must_use]
    pub fn with_clock(config: MugConfig, heat_loss: HeatLossRate, clock: C) -> Self {
        Self {
            mug: Mug::new(config),
            heat_loss,
            last_fill: None,
            clock,
        }
    }

    /// Returns the decay rate of this mug.
    #[must_use]
    pub fn heat_loss(&self) -> HeatLossRate {
        self.heat_loss
    }

    /// Returns the most recent fill, if any.
    #[must_use]
    pub fn last_fill(&self) -> Option<&FillRecord> {
        self.last_fill.as_ref()
    }

    /// Returns the wrapped mug.
    #[must_use]
    pub fn into_inner(self) -> Mug {
        self.mug
    }

    /// Pours `quantity` of `beverage` at `temperature`.
    ///
    /// The temperature and current time are recorded before the volume
    /// rules of [`Mug::fill`] are applied, so they reflect this call even if
    /// the fill is rejected.
    ///
    /// # Errors
    ///
    /// - [`ThermalError::InvalidTemperature`] if `temperature` is below
    ///   absolute zero or `NaN`. Nothing is recorded and the mug is unchanged.
    /// - [`ThermalError::Fill`] carrying the [`FillError`] of the wrapped mug.
    ///
    /// [`FillError`]: crate::models::mug::FillError
    pub fn fill(
        &mut self,
        temperature: ThermodynamicTemperature,
        quantity: Volume,
        beverage: impl Into<Beverage>,
    ) -> Result<FillOutcome, ThermalError> {
        check_temperature(temperature)?;
        self.record_fill(temperature);

        Ok(self.mug.fill(quantity, beverage)?)
    }

    /// Pours as much of `source` as fits into this mug, arriving at `temperature`.
    ///
    /// Volumes follow [`transfer`]. If anything arrives, the pour replaces
    /// the last fill record with `temperature` and the current time, as a
    /// [`fill`](Self::fill) would. A refused pour, or one that moves nothing,
    /// leaves the record alone.
    ///
    /// # Errors
    ///
    /// Returns [`ThermalError::InvalidTemperature`] if `temperature` is below
    /// absolute zero or `NaN`. Neither mug is changed.
    pub fn receive_from(
        &mut self,
        source: &mut Mug,
        temperature: ThermodynamicTemperature,
    ) -> Result<TransferOutcome, ThermalError> {
        check_temperature(temperature)?;

        let outcome = transfer(source, &mut self.mug);
        if outcome.moved() > volume_tolerance() {
            self.record_fill(temperature);
        }
        Ok(outcome)
    }

    /// Pours as much of this mug as fits into another thermal mug.
    ///
    /// The contents arrive at their current temperature under `ambient`,
    /// and `target` records the pour as described in
    /// [`receive_from`](Self::receive_from). This mug keeps its own record.
    ///
    /// # Errors
    ///
    /// Returns [`ThermalError::NoFillRecorded`] if this mug was never filled.
    pub fn pour_into<D: Clock>(
        &mut self,
        target: &mut ThermalMug<D>,
        ambient: ThermodynamicTemperature,
    ) -> Result<TransferOutcome, ThermalError> {
        let temperature = self.current_temperature(ambient)?;
        target.receive_from(&mut self.mug, temperature)
    }

    /// Returns the cooling curve of the most recent fill.
    ///
    /// # Errors
    ///
    /// Returns [`ThermalError::NoFillRecorded`] if the mug was never filled.
    pub fn cooling_curve(
        &self,
        ambient: ThermodynamicTemperature,
    ) -> Result<CoolingCurve, ThermalError> {
        let record = self.last_fill.ok_or(ThermalError::NoFillRecorded)?;
        Ok(CoolingCurve {
            initial: record.temperature,
            ambient,
            rate: self.heat_loss,
        })
    }

    /// Returns the current temperature of the contents.
    ///
    /// Rounding for display is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ThermalError::NoFillRecorded`] if the mug was never filled.
    pub fn current_temperature(
        &self,
        ambient: ThermodynamicTemperature,
    ) -> Result<ThermodynamicTemperature, ThermalError> {
        let curve = self.cooling_curve(ambient)?;
        Ok(curve.temperature_after(self.time_since_fill()?))
    }

    /// Returns how much longer until the contents reach `target`.
    ///
    /// Returns `Ok(Some(Time::ZERO))` if the contents are already at or past
    /// `target` on their way to ambient, and `Ok(None)` if they never will be.
    ///
    /// # Errors
    ///
    /// Returns [`ThermalError::NoFillRecorded`] if the mug was never filled.
    pub fn time_until(
        &self,
        target: ThermodynamicTemperature,
        ambient: ThermodynamicTemperature,
    ) -> Result<Option<Time>, ThermalError> {
        let now = self.current_temperature(ambient)?;
        Ok(cooling::time_to_reach(now, ambient, self.heat_loss, target))
    }

    /// Drinks `size` from the mug.
    ///
    /// # Errors
    ///
    /// See [`Mug::sip`].
    pub fn sip(&mut self, size: Volume) -> Result<SipOutcome, SipError> {
        self.mug.sip(size)
    }

    /// Takes a standard sip.
    ///
    /// # Errors
    ///
    /// See [`Mug::sip_standard`].
    pub fn sip_standard(&mut self) -> Result<SipOutcome, SipError> {
        self.mug.sip_standard()
    }

    /// Pours the contents away.
    ///
    /// The last fill record is kept.
    pub fn empty(&mut self) {
        self.mug.empty();
    }

    /// Empties and cleans the mug.
    pub fn wash(&mut self) {
        self.mug.wash();
    }

    /// Pours as much of this mug as fits into `target`.
    pub fn transfer_into(&mut self, target: &mut Mug) -> TransferOutcome {
        self.mug.transfer_into(target)
    }

    fn record_fill(&mut self, temperature: ThermodynamicTemperature) {
        let timestamp = self.clock.now();
        trace!(
            temperature_c = temperature.get::<degree_celsius>(),
            %timestamp,
            "recorded fill"
        );
        self.last_fill = Some(FillRecord {
            temperature,
            timestamp,
        });
    }

    /// Elapsed time since the last fill, clamped at zero if the clock went back.
    fn time_since_fill(&self) -> Result<Time, ThermalError> {
        let record = self.last_fill.ok_or(ThermalError::NoFillRecorded)?;
        let elapsed = self.clock.now().duration_since(record.timestamp);
        Ok(Time::new::<second>(elapsed.as_secs_f64().max(0.0)))
    }
}

fn check_temperature(temperature: ThermodynamicTemperature) -> Result<(), ThermalError> {
    NonNegative::new(temperature.get::<kelvin>())?;
    Ok(())
}

impl<C> Deref for ThermalMug<C> {
    type Target = Mug;

    fn deref(&self) -> &Self::Target {
        &self.mug
    }
}

impl<C> fmt::Display for ThermalMug<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.mug, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::{
        ConstZero,
        si::{time::minute, volume::milliliter},
    };

    use crate::{
        models::mug::{Capacity, FillError, MugState},
        support::constraint::ConstraintError,
    };

    use super::test_support::ManualClock;

    fn ml(value: f64) -> Volume {
        Volume::new::<milliliter>(value)
    }

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    fn thermal_mug(clock: &ManualClock, k_per_minute: f64) -> ThermalMug<&ManualClock> {
        ThermalMug::with_clock(
            MugConfig::with_capacity(Capacity::millilitres(350.0).unwrap()),
            HeatLossRate::per_minute(k_per_minute).unwrap(),
            clock,
        )
    }

    #[test]
    fn temperature_requires_a_fill() {
        let clock = ManualClock::new();
        let mug = thermal_mug(&clock, 0.05);

        assert_eq!(
            mug.current_temperature(room_temperature()),
            Err(ThermalError::NoFillRecorded)
        );
        assert_eq!(
            mug.time_until(celsius(60.0), room_temperature()),
            Err(ThermalError::NoFillRecorded)
        );
    }

    #[test]
    fn fresh_pour_is_at_fill_temperature() {
        let clock = ManualClock::new();
        let mut mug = thermal_mug(&clock, 0.05);

        mug.fill(celsius(85.0), ml(300.0), Beverage::default()).unwrap();

        let t = mug.current_temperature(room_temperature()).unwrap();
        assert_relative_eq!(t.get::<degree_celsius>(), 85.0, epsilon = 1e-9);
        assert_eq!(mug.describe(), "has 300ml of tea left.");
    }

    #[test]
    fn fresh_pour_on_the_system_clock() {
        let mut mug = ThermalMug::new(MugConfig::default(), HeatLossRate::per_minute(0.05).unwrap());

        mug.fill(celsius(85.0), ml(300.0), "tea").unwrap();

        let t = mug.current_temperature(room_temperature()).unwrap();
        assert_relative_eq!(t.get::<degree_celsius>(), 85.0, epsilon = 1e-2);
    }

    #[test]
    fn cools_toward_ambient() {
        let clock = ManualClock::new();
        let mut mug = thermal_mug(&clock, 0.05);
        mug.fill(celsius(90.0), ml(250.0), "coffee").unwrap();

        clock.advance_minutes(10.0);

        let t = mug.current_temperature(room_temperature()).unwrap();
        let expected = 20.0 + 70.0 * (-0.5_f64).exp();
        assert_relative_eq!(t.get::<degree_celsius>(), expected, epsilon = 1e-9);

        let colder_room = mug.current_temperature(celsius(5.0)).unwrap();
        assert!(colder_room < t);
    }

    #[test]
    fn refill_restarts_the_curve() {
        let clock = ManualClock::new();
        let mut mug = thermal_mug(&clock, 0.1);
        mug.fill(celsius(90.0), ml(100.0), "coffee").unwrap();

        clock.advance_minutes(30.0);
        mug.fill(celsius(80.0), ml(100.0), "coffee").unwrap();

        let t = mug.current_temperature(room_temperature()).unwrap();
        assert_relative_eq!(t.get::<degree_celsius>(), 80.0, epsilon = 1e-9);
        assert_eq!(mug.last_fill().map(|r| r.timestamp), Some(clock.now()));
    }

    #[test]
    fn fill_errors_propagate() {
        let clock = ManualClock::new();
        let mut mug = thermal_mug(&clock, 0.05);
        mug.fill(celsius(90.0), ml(200.0), "coffee").unwrap();

        let err = mug.fill(celsius(70.0), ml(50.0), "tea").unwrap_err();
        assert!(matches!(
            err,
            ThermalError::Fill(FillError::ContentMismatch { .. })
        ));
        assert_relative_eq!(mug.level().get::<milliliter>(), 200.0, epsilon = 1e-9);

        let overflow = mug.fill(celsius(90.0), ml(200.0), "coffee").unwrap();
        assert!(matches!(overflow, FillOutcome::Overflowed { .. }));
        assert_eq!(mug.state(), MugState::Full);
    }

    #[test]
    fn time_until_accounts_for_elapsed_time() {
        let clock = ManualClock::new();
        let mut mug = thermal_mug(&clock, 0.05);
        mug.fill(celsius(90.0), ml(250.0), "coffee").unwrap();

        let from_pour = mug
            .time_until(celsius(60.0), room_temperature())
            .unwrap()
            .unwrap();

        clock.advance_minutes(5.0);
        let later = mug
            .time_until(celsius(60.0), room_temperature())
            .unwrap()
            .unwrap();

        assert_relative_eq!(
            from_pour.get::<minute>() - later.get::<minute>(),
            5.0,
            epsilon = 1e-9
        );
        assert_eq!(
            mug.time_until(celsius(15.0), room_temperature()),
            Ok(None)
        );
    }

    #[test]
    fn delegates_volume_operations() {
        let clock = ManualClock::new();
        let mut mug = thermal_mug(&clock, 0.05);
        mug.fill(celsius(90.0), ml(120.0), "coffee").unwrap();

        assert_eq!(mug.sip(ml(20.0)), Ok(SipOutcome::Sipped));
        assert_eq!(mug.sip_standard(), Ok(SipOutcome::Sipped));

        let mut cup = Mug::default();
        let outcome = mug.transfer_into(&mut cup);
        assert_relative_eq!(outcome.moved().get::<milliliter>(), 70.0, epsilon = 1e-9);
        assert_eq!(mug.sip_standard(), Err(SipError::AlreadyEmpty));

        mug.wash();
        assert!(mug.is_clean());
        assert_eq!(mug.to_string(), "The mug is empty.");
        assert!(mug.last_fill().is_some());
    }

    #[test]
    fn rejects_impossible_temperatures() {
        let clock = ManualClock::new();
        let mut mug = thermal_mug(&clock, 0.05);

        assert_eq!(
            mug.fill(celsius(f64::NAN), ml(200.0), "tea"),
            Err(ThermalError::InvalidTemperature(ConstraintError::NotANumber))
        );
        assert_eq!(
            mug.fill(celsius(-300.0), ml(200.0), "tea"),
            Err(ThermalError::InvalidTemperature(ConstraintError::Negative))
        );
        assert!(mug.last_fill().is_none());
        assert_eq!(mug.level(), Volume::ZERO);

        let mut source = Mug::default();
        source.fill(ml(100.0), "tea").unwrap();
        assert!(mug.receive_from(&mut source, celsius(f64::NAN)).is_err());
        assert_relative_eq!(source.level().get::<milliliter>(), 100.0, epsilon = 1e-9);
        assert!(mug.last_fill().is_none());
    }

    #[test]
    fn receiving_a_pour_records_a_fill() {
        let clock = ManualClock::new();
        let mut mug = thermal_mug(&clock, 0.05);
        let mut source = Mug::default();
        source.fill(ml(200.0), "coffee").unwrap();

        clock.advance_minutes(3.0);
        let outcome = mug.receive_from(&mut source, celsius(70.0)).unwrap();

        assert_relative_eq!(outcome.moved().get::<milliliter>(), 200.0, epsilon = 1e-9);
        assert_eq!(mug.describe(), "has 200ml of coffee left.");
        assert_eq!(source.level(), Volume::ZERO);

        let record = mug.last_fill().copied().unwrap();
        assert_relative_eq!(record.temperature.get::<degree_celsius>(), 70.0, epsilon = 1e-9);
        assert_eq!(record.timestamp, clock.now());

        clock.advance_minutes(10.0);
        let t = mug.current_temperature(room_temperature()).unwrap();
        let expected = 20.0 + 50.0 * (-0.5_f64).exp();
        assert_relative_eq!(t.get::<degree_celsius>(), expected, epsilon = 1e-9);
    }

    #[test]
    fn refused_pour_keeps_the_record() {
        let clock = ManualClock::new();
        let mut mug = thermal_mug(&clock, 0.05);
        mug.fill(celsius(90.0), ml(100.0), "coffee").unwrap();
        let before = mug.last_fill().copied();

        let mut source = Mug::default();
        source.fill(ml(100.0), "tea").unwrap();
        clock.advance_minutes(5.0);

        assert_eq!(
            mug.receive_from(&mut source, celsius(60.0)),
            Ok(TransferOutcome::Refused)
        );
        assert_eq!(mug.last_fill().copied(), before);
    }

    #[test]
    fn pours_between_thermal_mugs() {
        let clock = ManualClock::new();
        let mut pot = thermal_mug(&clock, 0.05);
        let mut cup = thermal_mug(&clock, 0.1);

        assert_eq!(
            pot.pour_into(&mut cup, room_temperature()),
            Err(ThermalError::NoFillRecorded)
        );

        pot.fill(celsius(90.0), ml(300.0), "tea").unwrap();
        cup.fill(celsius(80.0), ml(250.0), "tea").unwrap();
        clock.advance_minutes(10.0);

        let outcome = pot.pour_into(&mut cup, room_temperature()).unwrap();

        let TransferOutcome::Partial { moved, remaining } = outcome else {
            panic!("expected a partial pour, got {outcome:?}");
        };
        assert_relative_eq!(moved.get::<milliliter>(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(remaining.get::<milliliter>(), 200.0, epsilon = 1e-9);
        assert_eq!(cup.state(), MugState::Full);

        let poured_at = 20.0 + 70.0 * (-0.5_f64).exp();
        let t = cup.current_temperature(room_temperature()).unwrap();
        assert_relative_eq!(t.get::<degree_celsius>(), poured_at, epsilon = 1e-9);

        let pot_t = pot.current_temperature(room_temperature()).unwrap();
        assert_relative_eq!(pot_t.get::<degree_celsius>(), poured_at, epsilon = 1e-9);
        assert_eq!(pot.last_fill().map(|r| r.timestamp), Some(Timestamp::UNIX_EPOCH));
    }
}
