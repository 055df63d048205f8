use serde::{Deserialize, Serialize};

/// A Gaussian skill belief: mean `mu` and standard deviation `sigma`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    pub mu: f64,
    pub sigma: f64
}

/// Players of one team, in their original order.
pub type Team = Vec<Rating>;

impl Rating {
    pub fn new(mu: f64, sigma: f64) -> Rating {
        Rating { mu, sigma }
    }
}
