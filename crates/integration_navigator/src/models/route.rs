//! Routes from the routing service

use domain::value_objects::GeoCoordinate;
use serde::Deserialize;

/// A computed route
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawRoute")]
pub struct Route {
    /// Length in meters
    pub length: f64,
    /// Duration in minutes
    pub duration: f64,
    /// Polyline of the route
    pub coords: Vec<GeoCoordinate>,
    /// Turn by turn instructions
    pub instructions: Vec<Instruction>,
}

/// A single turn by turn step
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Distance in meters
    pub distance: f64,
    /// Turn to take at the start of the step
    pub indication: Indication,
    /// Duration in minutes
    pub duration: i64,
    /// Human readable step, in German
    pub description: String,
}

/// Direction hint of an instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indication {
    SharpLeft,
    Left,
    LightLeft,
    Continue,
    LightRight,
    Right,
    SharpRight,
    DestinationReached,
    Intermediate,
    Roundabout,
}

impl TryFrom<i64> for Indication {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Ok(match value {
            -3 => Self::SharpLeft,
            -2 => Self::Left,
            -1 => Self::LightLeft,
            0 => Self::Continue,
            1 => Self::LightRight,
            2 => Self::Right,
            3 => Self::SharpRight,
            4 => Self::DestinationReached,
            5 => Self::Intermediate,
            6 => Self::Roundabout,
            other => return Err(format!("unknown route indication {other}")),
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    route_length: f64,
    route_time: f64,
    coords: Vec<f64>,
    instructions: RawInstructions,
}

#[derive(Debug, Deserialize)]
struct RawInstructions {
    distances: Vec<f64>,
    indications: Vec<i64>,
    mins: Vec<i64>,
    descriptions: Vec<String>,
}

impl TryFrom<RawRoute> for Route {
    type Error = String;

    fn try_from(raw: RawRoute) -> Result<Self, Self::Error> {
        if raw.coords.len() % 2 != 0 {
            return Err(format!(
                "odd number of route coordinates ({}), expected latitude/longitude pairs",
                raw.coords.len()
            ));
        }
        let coords = raw
            .coords
            .chunks_exact(2)
            .map(|pair| GeoCoordinate::new_unchecked(pair[0], pair[1]))
            .collect();

        let RawInstructions {
            distances,
            indications,
            mins,
            descriptions,
        } = raw.instructions;
        let lengths = [
            distances.len(),
            indications.len(),
            mins.len(),
            descriptions.len(),
        ];
        if lengths.iter().any(|&len| len != lengths[0]) {
            return Err(format!(
                "route instruction lengths differ: {} distances, {} indications, {} mins, {} descriptions",
                lengths[0], lengths[1], lengths[2], lengths[3]
            ));
        }

        let instructions = distances
            .into_iter()
            .zip(indications)
            .zip(mins.into_iter().zip(descriptions))
            .map(|((distance, indication), (duration, description))| {
                Ok(Instruction {
                    distance,
                    indication: Indication::try_from(indication)?,
                    duration,
                    description,
                })
            })
            .collect::<Result<_, String>>()?;

        Ok(Self {
            length: raw.route_length,
            duration: raw.route_time,
            coords,
            instructions,
        })
    }
}
