use crate::tag::NbtTag;

/// Entries keep insertion order; lookups scan and return the first match,
/// mirroring how the host resolves duplicate keys.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct NbtCompound {
    pub child_tags: Vec<(String, NbtTag)>,
}

impl NbtCompound {
    pub fn new() -> NbtCompound {
        NbtCompound {
            child_tags: Vec::new(),
        }
    }

    /// Inserts the tag only when the key is not already present.
    pub fn put(&mut self, name: String, value: impl Into<NbtTag>) {
        if !self.child_tags.iter().any(|(key, _)| key == &name) {
            self.child_tags.push((name, value.into()));
        }
    }

    /// Inserts the tag, overwriting the first existing entry with that key.
    pub fn set(&mut self, name: String, value: impl Into<NbtTag>) {
        let value = value.into();
        for (key, tag) in &mut self.child_tags {
            if *key == name {
                *tag = value;
                return;
            }
        }
        self.child_tags.push((name, value));
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&NbtTag> {
        for (key, value) in &self.child_tags {
            if key.as_str() == name {
                return Some(value);
            }
        }
        None
    }

    #[inline]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut NbtTag> {
        for (key, value) in &mut self.child_tags {
            if key.as_str() == name {
                return Some(value);
            }
        }
        None
    }

    pub fn get_byte(&self, name: &str) -> Option<i8> {
        self.get(name).and_then(|tag| tag.extract_byte())
    }

    pub fn get_short(&self, name: &str) -> Option<i16> {
        self.get(name).and_then(|tag| tag.extract_short())
    }

    pub fn get_int(&self, name: &str) -> Option<i32> {
        self.get(name).and_then(|tag| tag.extract_int())
    }

    pub fn get_long(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(|tag| tag.extract_long())
    }

    pub fn get_float(&self, name: &str) -> Option<f32> {
        self.get(name).and_then(|tag| tag.extract_float())
    }

    pub fn get_double(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(|tag| tag.extract_double())
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(|tag| tag.extract_bool())
    }

    pub fn get_string(&self, name: &str) -> Option<&String> {
        self.get(name).and_then(|tag| tag.extract_string())
    }

    pub fn get_list(&self, name: &str) -> Option<&Vec<NbtTag>> {
        self.get(name).and_then(|tag| tag.extract_list())
    }

    pub fn get_list_mut(&mut self, name: &str) -> Option<&mut Vec<NbtTag>> {
        self.get_mut(name).and_then(|tag| tag.extract_list_mut())
    }

    pub fn get_compound(&self, name: &str) -> Option<&NbtCompound> {
        self.get(name).and_then(|tag| tag.extract_compound())
    }
}

impl FromIterator<(String, NbtTag)> for NbtCompound {
    fn from_iter<T: IntoIterator<Item = (String, NbtTag)>>(iter: T) -> Self {
        let mut compound = NbtCompound::new();
        for (key, value) in iter {
            compound.put(key, value);
        }
        compound
    }
}
