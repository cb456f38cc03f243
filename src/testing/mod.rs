mod fake_host;

pub use fake_host::FakeHost;
