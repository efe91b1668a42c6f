pub mod forward_list;

pub use forward_list::ForwardList;
