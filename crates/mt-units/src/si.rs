//! Interop with `uom` SI quantities.
//!
//! A measurement enters `uom` through its base value, so the stored unit is
//! lost; coming back yields a measurement in the family's base unit.

use uom::si::f64::{
    Information as UomInformation, Length as UomLength, Mass as UomMass,
    ThermodynamicTemperature as UomThermodynamicTemperature, Time as UomTime,
};
use uom::si::information::byte;
use uom::si::length::meter;
use uom::si::mass::kilogram;
use uom::si::thermodynamic_temperature::kelvin;
use uom::si::time::second;

use crate::{DataSize, Length, Mass, Temperature, Time};

/// Measurements that map onto a `uom` SI quantity.
pub trait ToSi {
    type Quantity;

    fn to_si(&self) -> Self::Quantity;

    fn from_si(q: Self::Quantity) -> Self;
}

impl ToSi for Length {
    type Quantity = UomLength;

    fn to_si(&self) -> UomLength {
        UomLength::new::<meter>(self.base_value())
    }

    fn from_si(q: UomLength) -> Self {
        Length::base(q.get::<meter>())
    }
}

impl ToSi for Mass {
    type Quantity = UomMass;

    fn to_si(&self) -> UomMass {
        UomMass::new::<kilogram>(self.base_value())
    }

    fn from_si(q: UomMass) -> Self {
        Mass::base(q.get::<kilogram>())
    }
}

impl ToSi for Time {
    type Quantity = UomTime;

    fn to_si(&self) -> UomTime {
        UomTime::new::<second>(self.base_value())
    }

    fn from_si(q: UomTime) -> Self {
        Time::base(q.get::<second>())
    }
}

impl ToSi for Temperature {
    type Quantity = UomThermodynamicTemperature;

    fn to_si(&self) -> UomThermodynamicTemperature {
        UomThermodynamicTemperature::new::<kelvin>(self.base_value())
    }

    fn from_si(q: UomThermodynamicTemperature) -> Self {
        Temperature::base(q.get::<kelvin>())
    }
}

impl ToSi for DataSize {
    type Quantity = UomInformation;

    fn to_si(&self) -> UomInformation {
        UomInformation::new::<byte>(self.base_value())
    }

    fn from_si(q: UomInformation) -> Self {
        DataSize::base(q.get::<byte>())
    }
}
