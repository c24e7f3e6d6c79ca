use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum OneOrList<T> {
    One(T),
    List(Vec<T>),
}

impl<T> OneOrList<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            OneOrList::One(value) => std::slice::from_ref(value).iter(),
            OneOrList::List(values) => values.iter(),
        }
    }
}

impl<T: PartialEq> OneOrList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }
}

impl<T> From<Vec<T>> for OneOrList<T> {
    fn from(mut value: Vec<T>) -> Self {
        match value.len() {
            1 => OneOrList::One(value.remove(0)),
            _ => OneOrList::List(value),
        }
    }
}

impl<T: Display + Debug> Display for OneOrList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OneOrList::One(t) => write!(f, "{}", t),
            OneOrList::List(t) => write!(f, "{:?}", t),
        }
    }
}
