use core::fmt::Display;
use std::{ops::RangeInclusive, str::FromStr};

use clap::ValueEnum;
use glam::Vec3;
use rtgeom::scene::{
    examples::{CornellBoxScene, DebugScene},
    Scene,
};

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableScene {
    #[default]
    CornellBox,
    Debug,
}

impl AvailableScene {
    pub fn insert_into(self, scene: &mut Scene) {
        match self {
            AvailableScene::CornellBox => CornellBoxScene::insert_into(scene),
            AvailableScene::Debug => DebugScene::insert_into(scene),
        }
    }
}

/// A vector given as `x,y,z`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec3Arg(pub Vec3);

impl FromStr for Vec3Arg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut split_it = s.split(',').map(str::trim);
        let (Some(x), Some(y), Some(z), None) = (
            split_it.next(),
            split_it.next(),
            split_it.next(),
            split_it.next(),
        ) else {
            return Err(anyhow::anyhow!("Incorrect format, expected `x,y,z`"));
        };

        Ok(Vec3Arg(Vec3::new(x.parse()?, y.parse()?, z.parse()?)))
    }
}

impl Display for Vec3Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{},{},{}", self.0.x, self.0.y, self.0.z))
    }
}

/// A closed interval given as `a..b`, both ends accept `inf`.
/// A single value `a` stands for `a..inf`.
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalArg(pub RangeInclusive<f32>);

impl FromStr for IntervalArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end): (f32, f32) = match s.split_once("..") {
            Some((a, b)) => (a.trim().parse()?, b.trim().parse()?),
            None => (s.trim().parse()?, f32::INFINITY),
        };

        if start.is_nan() || end.is_nan() {
            return Err(anyhow::anyhow!("NaN is not a valid interval bound"));
        }
        if start > end {
            return Err(anyhow::anyhow!("Empty interval {start}..{end}"));
        }
        Ok(IntervalArg(start..=end))
    }
}

impl Display for IntervalArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}..{}", self.0.start(), self.0.end()))
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::{IntervalArg, Vec3Arg};

    #[test]
    fn vec3() {
        let v: Vec3Arg = "1,-2.5, 3".parse().unwrap();
        assert_eq!(v.0, Vec3::new(1.0, -2.5, 3.0));
        assert_eq!(v.to_string(), "1,-2.5,3");

        assert!("1,2".parse::<Vec3Arg>().is_err());
        assert!("1,2,3,4".parse::<Vec3Arg>().is_err());
        assert!("1,a,3".parse::<Vec3Arg>().is_err());
    }

    #[test]
    fn interval() {
        let i: IntervalArg = "0.001..inf".parse().unwrap();
        assert_eq!(i.0, 0.001..=f32::INFINITY);

        let i: IntervalArg = "2".parse().unwrap();
        assert_eq!(i.0, 2.0..=f32::INFINITY);

        let i: IntervalArg = "-inf..3".parse().unwrap();
        assert_eq!(i.0, f32::NEG_INFINITY..=3.0);
        assert_eq!(i.to_string(), "-inf..3");

        assert!("3..1".parse::<IntervalArg>().is_err());
        assert!("NaN..1".parse::<IntervalArg>().is_err());
        assert!("a..b".parse::<IntervalArg>().is_err());
    }
}
