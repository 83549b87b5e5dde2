use super::delete;
use crate::collection::Collection;
use crate::model::NoteId;

/// Permanently erases every note currently in the trash.
pub fn run(collection: &mut Collection) -> Vec<NoteId> {
    let trashed = collection.trashed_ids();
    delete::run(collection, &trashed, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::view::View;

    #[test]
    fn empties_trash_and_nothing_else() {
        let mut collection = Collection::new();
        let keep = create::run(&mut collection, &View::Notes).unwrap();
        let gone = create::run(&mut collection, &View::Notes).unwrap();
        delete::run(&mut collection, &[gone], false);

        assert_eq!(run(&mut collection), vec![gone]);
        assert!(collection.note(&gone).is_none());
        assert!(collection.note(&keep).is_some());
        assert!(run(&mut collection).is_empty());
    }
}
