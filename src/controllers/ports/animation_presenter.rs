use std::error::Error;
use std::io::Write;

use crate::core::data::animation::Animation;

pub trait AnimationPresenterPort {
    type Failure: Error + Send + Sync + 'static;

    fn present<W: Write>(&self, animation: &Animation, out: W) -> Result<(), Self::Failure>;
}
