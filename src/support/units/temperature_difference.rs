use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for subtracting absolute temperatures.
///
/// `uom` does not define `ThermodynamicTemperature - ThermodynamicTemperature`
/// (see [#380](https://github.com/iliekturtles/uom/issues/380)), but the
/// cooling law is written in terms of the excess over ambient, which is
/// exactly that difference.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
    };

    #[test]
    fn excess_over_ambient() {
        let coffee = ThermodynamicTemperature::new::<degree_celsius>(80.0);
        let room = ThermodynamicTemperature::new::<degree_celsius>(20.0);

        assert_relative_eq!(coffee.minus(room).get::<delta_celsius>(), 60.0, epsilon = 1e-9);
        assert_relative_eq!(room.minus(coffee).get::<delta_celsius>(), -60.0, epsilon = 1e-9);
    }

    #[test]
    fn mixed_scales() {
        let room_c = ThermodynamicTemperature::new::<degree_celsius>(20.0);
        let room_f = ThermodynamicTemperature::new::<degree_fahrenheit>(68.0);
        assert_relative_eq!(room_f.minus(room_c).get::<delta_celsius>(), 0.0, epsilon = 1e-9);
    }
}
