//! Vehicle classes and the per-class value record used for toll coefficients
//! and toll rates alike.

/// The tolled vehicle classes, in their fixed column order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VehicleClass {
    Moto,
    Car,
    Rv,
    Bus,
    Truck,
}

impl VehicleClass {
    /// Every class in column order.
    pub const ALL: [VehicleClass; 5] = [
        VehicleClass::Moto,
        VehicleClass::Car,
        VehicleClass::Rv,
        VehicleClass::Bus,
        VehicleClass::Truck,
    ];

    /// Column label used in tabular output.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleClass::Moto  => "moto",
            VehicleClass::Car   => "car",
            VehicleClass::Rv    => "rv",
            VehicleClass::Bus   => "bus",
            VehicleClass::Truck => "truck",
        }
    }
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── VehicleRates ──────────────────────────────────────────────────────────────

/// One `f64` per [`VehicleClass`].
///
/// Holds the distance coefficients as well as the computed rates of a toll
/// row; both have the same shape.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleRates {
    pub moto:  f64,
    pub car:   f64,
    pub rv:    f64,
    pub bus:   f64,
    pub truck: f64,
}

impl VehicleRates {
    /// Rate per unit of distance for each class.
    pub const DEFAULT_COEFFICIENTS: VehicleRates = VehicleRates {
        moto:  0.8,
        car:   1.2,
        rv:    1.5,
        bus:   2.2,
        truck: 3.6,
    };

    /// Same value for every class.
    pub const fn splat(value: f64) -> Self {
        Self { moto: value, car: value, rv: value, bus: value, truck: value }
    }

    #[inline]
    pub fn get(&self, class: VehicleClass) -> f64 {
        match class {
            VehicleClass::Moto  => self.moto,
            VehicleClass::Car   => self.car,
            VehicleClass::Rv    => self.rv,
            VehicleClass::Bus   => self.bus,
            VehicleClass::Truck => self.truck,
        }
    }

    /// Apply `f` to every class value.
    #[inline]
    pub fn map(self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self {
            moto:  f(self.moto),
            car:   f(self.car),
            rv:    f(self.rv),
            bus:   f(self.bus),
            truck: f(self.truck),
        }
    }

    /// Every value multiplied by `factor`.
    #[inline]
    pub fn scaled(self, factor: f64) -> Self {
        self.map(|v| v * factor)
    }

    /// `(class, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (VehicleClass, f64)> + '_ {
        VehicleClass::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}
