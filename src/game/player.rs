use crate::game::hand::Hand;

#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            hand: Hand::new(),
        }
    }
}
