use std::sync::Arc;

use configs::StoreConfig;
use service::crud::{CrudService, Payload};
use service::links::{Link, LinkService};
use service::pagination::PageLimits;
use service::products::{Product, ProductService};
use service::storage::memory_store::MemoryStore;
use service::tasks::{Task, TaskService};
use service::users::{User, UserService};

/// Services shared by all handlers. Each entity kind owns its own store.
#[derive(Clone)]
pub struct ServerState {
    pub tasks: TaskService,
    pub links: LinkService,
    pub products: ProductService,
    pub users: UserService,
}

fn in_memory_service<P: Payload>(limits: PageLimits) -> CrudService<P> {
    CrudService::new(Arc::new(MemoryStore::<P>::new()), limits)
}

impl ServerState {
    /// Wire fresh in-memory stores into the services.
    pub fn in_memory(store: &StoreConfig) -> Self {
        let limits = PageLimits {
            default_limit: store.default_page_size,
            max_limit: store.max_page_size,
        };
        Self {
            tasks: in_memory_service(limits),
            links: in_memory_service(limits),
            products: in_memory_service(limits),
            users: in_memory_service(limits),
        }
    }
}

/// Per-kind access to the service that owns `P`.
pub trait ServiceFor<P: Payload> {
    fn service(&self) -> &CrudService<P>;
}

impl ServiceFor<Task> for ServerState {
    fn service(&self) -> &CrudService<Task> { &self.tasks }
}

impl ServiceFor<Link> for ServerState {
    fn service(&self) -> &CrudService<Link> { &self.links }
}

impl ServiceFor<Product> for ServerState {
    fn service(&self) -> &CrudService<Product> { &self.products }
}

impl ServiceFor<User> for ServerState {
    fn service(&self) -> &CrudService<User> { &self.users }
}
