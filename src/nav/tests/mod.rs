mod menu_behavior;

use crate::config::Config;
use crate::location::StaticLocation;
use crate::nav::NavigationController;
use crate::registry::{PageDescriptor, PageRegistry};

fn abc_registry() -> PageRegistry {
    PageRegistry::new(
        [("a.html", "A"), ("b.html", "B"), ("c.html", "C")]
            .into_iter()
            .map(|(id, label)| PageDescriptor::new(id, label, "fa-star", label))
            .collect(),
    )
    .expect("registry should build")
}

fn controller_at(path: &str) -> NavigationController<StaticLocation> {
    NavigationController::new(abc_registry(), StaticLocation::new(path), Config::default())
}
