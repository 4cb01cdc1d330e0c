mod in_memory_complaint_repository;

pub use in_memory_complaint_repository::InMemoryComplaintRepository;
