use pdf_writer::Ref;
use std::collections::HashMap;

#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    Info,
    PageTree,
    Page(usize),
    ContentForPage(usize),
    Font(usize),
    Outlines,
    OutlineEntry(usize),
}

/// Hands out sequential object numbers and remembers which object each one was
/// generated for, so that objects written later can refer back to earlier ones.
pub struct ObjectReferences {
    refs: HashMap<RefType, Ref>,
    next_id: i32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences {
            refs: HashMap::new(),
            next_id: 1,
        }
    }

    fn new_id(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    pub fn get(&self, ref_type: RefType) -> Option<Ref> {
        self.refs.get(&ref_type).copied()
    }

    pub fn gen(&mut self, ref_type: RefType) -> Ref {
        let id = self.new_id();
        self.refs.insert(ref_type, id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_recallable() {
        let mut refs = ObjectReferences::new();
        let catalog = refs.gen(RefType::Catalog);
        let page = refs.gen(RefType::Page(0));

        assert_eq!(catalog, Ref::new(1));
        assert_eq!(page, Ref::new(2));
        assert_eq!(refs.get(RefType::Page(0)), Some(page));
        assert_eq!(refs.get(RefType::Page(1)), None);
    }
}
