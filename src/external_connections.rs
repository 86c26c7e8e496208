use sqlx::PgConnection;

/// A handle to an active database connection, which may or may not be pooled
pub trait ConnectionHandle {
    fn borrow_connection(&mut self) -> &mut PgConnection;
}

/// Owner of the clients used to reach systems outside this process. Business logic and driven
/// adapters receive it as a parameter instead of reaching for global state.
pub trait ExternalConnectivity: Sync {
    type DbHandle<'cxn_borrow>: ConnectionHandle + Send
    where
        Self: 'cxn_borrow;

    /// Acquires a connection to the database
    async fn database_cxn(&mut self) -> Result<Self::DbHandle<'_>, anyhow::Error>;
}

#[cfg(test)]
pub mod test_util {
    use super::*;

    /// Stand-in for [ExternalConnectivity] in tests where the driven ports are in-memory fakes
    /// and never touch a real database
    pub struct FakeExternalConnectivity {
        pub connections_requested: usize,
    }

    impl FakeExternalConnectivity {
        pub fn new() -> Self {
            FakeExternalConnectivity {
                connections_requested: 0,
            }
        }
    }

    pub struct FakeConnectionHandle;

    impl ConnectionHandle for FakeConnectionHandle {
        fn borrow_connection(&mut self) -> &mut PgConnection {
            panic!("fake connection handles cannot reach a real database")
        }
    }

    impl ExternalConnectivity for FakeExternalConnectivity {
        type DbHandle<'cxn_borrow> = FakeConnectionHandle;

        async fn database_cxn(&mut self) -> Result<Self::DbHandle<'_>, anyhow::Error> {
            self.connections_requested += 1;
            Ok(FakeConnectionHandle)
        }
    }
}
