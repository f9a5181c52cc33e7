#[cfg(test)]
mod tests {
    use eyre::Result;
    use store::batch::model::{Batch, Committed};
    use store::batch::store::Store as BatchStore;
    use store::block::store::Store as BlockStore;
    use store::checkpoint::model::Checkpoint;
    use store::checkpoint::store::Store as CheckpointStore;
    use store::client::Client;
    use store::failed::model::FailedLog;
    use store::failed::store::Store as FailedLogStore;
    use store::token::model::Token;
    use store::token::store::Store as TokenStore;
    use store::transfer::model::Transfer;
    use store::transfer::store::Store as TransferStore;

    fn transfer(block_number: i64, tx_byte: u8, log_index: i64, amount: &str) -> Transfer {
        Transfer {
            block_number,
            transaction_hash: vec![tx_byte; 32],
            log_index,
            token_address: vec![0xEE; 20],
            from_address: vec![0x0A; 20],
            to_address: vec![0x0B; 20],
            amount: amount.to_string(),
        }
    }

    fn token(byte: u8, name: &str, decimals: i64) -> Token {
        Token {
            token_address: vec![byte; 20],
            name: name.to_string(),
            symbol: name.to_uppercase(),
            decimals,
        }
    }

    #[tokio::test]
    async fn test_last_checkpoint_never_decreases() -> Result<()> {
        let client = Client::init("sqlite::memory:").await?;
        let store = CheckpointStore::new(client);

        assert!(store.get_last_checkpoint().await?.is_none());

        store.insert_checkpoint(&Checkpoint { block_number: 12345 }).await?;
        store.insert_checkpoint(&Checkpoint { block_number: 12346 }).await?;
        // a stale writer recording an older boundary
        store.insert_checkpoint(&Checkpoint { block_number: 12000 }).await?;
        // and a duplicate
        store.insert_checkpoint(&Checkpoint { block_number: 12346 }).await?;

        let last = store.get_last_checkpoint().await?.unwrap();
        assert_eq!(last.block_number, 12346);
        // the stale boundary is still recorded, it just never wins
        assert!(store.get_checkpoint_by_number(12000).await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_insert_transfers_twice_is_idempotent() -> Result<()> {
        let client = Client::init("sqlite::memory:").await?;
        let store = TransferStore::new(client);

        let transfers = vec![
            transfer(100, 0x01, 0, "500"),
            // same transaction, second Transfer emission
            transfer(100, 0x01, 1, "7"),
            transfer(101, 0x02, 0, "9"),
        ];

        assert_eq!(store.insert_transfers_batch(&transfers).await?, 3);
        assert_eq!(store.insert_transfers_batch(&transfers).await?, 0);

        let stored = store.get_transfers_between_block_numbers(0, 200).await?;
        assert_eq!(stored, transfers);
        assert_eq!(store.count_transfers().await?, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_transfers_by_recipient_and_sender() -> Result<()> {
        let client = Client::init("sqlite::memory:").await?;
        let store = TransferStore::new(client);

        let mut outgoing = transfer(7, 0x03, 0, "30");
        outgoing.from_address = vec![0x0B; 20];
        outgoing.to_address = vec![0x0C; 20];
        store.insert_transfers_batch(&[transfer(5, 0x02, 0, "100"), outgoing.clone()]).await?;

        let received = store.get_transfers_by_recipient(&[0x0B; 20]).await?;
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].amount, "100");

        let sent = store.get_transfers_by_sender(&[0x0B; 20]).await?;
        assert_eq!(sent, vec![outgoing]);

        assert!(store.get_transfers_by_sender(&[0x0C; 20]).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_token_metadata_is_never_overwritten() -> Result<()> {
        let client = Client::init("sqlite::memory:").await?;
        let store = TokenStore::new(client);

        assert_eq!(store.insert_tokens_batch(&[token(0x01, "first", 6)]).await?, 1);
        assert_eq!(store.insert_tokens_batch(&[token(0x01, "second", 18)]).await?, 0);

        let stored = store.get_token(&[0x01; 20]).await?.unwrap();
        assert_eq!(stored.name, "first");
        assert_eq!(stored.decimals, 6);
        assert!(store.get_token(&[0x02; 20]).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_commit_batch_writes_everything_with_checkpoint() -> Result<()> {
        let client = Client::init("sqlite::memory:").await?;
        let batch_store = BatchStore::new(client.clone());

        let batch = Batch {
            checkpoint: Checkpoint { block_number: 101 },
            transfers: vec![transfer(100, 0x01, 0, "500"), transfer(100, 0x02, 3, "1")],
            failed_logs: vec![FailedLog {
                raw_log: r#"{"data":"0x"}"#.to_string(),
                error_message: "invalid amount".to_string(),
            }],
            tokens: vec![token(0xEE, "tether", 6)],
        };

        let committed = batch_store.commit(&batch).await?;
        assert_eq!(committed.blocks, 1);
        assert_eq!(committed.transfers, 2);
        assert_eq!(committed.failed_logs, 1);
        assert_eq!(committed.tokens, 1);

        // replaying the same window writes nothing new
        let replayed = batch_store.commit(&batch).await?;
        assert_eq!(replayed, Committed::default());

        let checkpoint = CheckpointStore::new(client.clone()).get_last_checkpoint().await?;
        assert_eq!(checkpoint, Some(Checkpoint { block_number: 101 }));
        assert_eq!(BlockStore::new(client.clone()).get_block_numbers().await?, vec![100]);
        assert_eq!(FailedLogStore::new(client.clone()).get_failed_logs().await?.len(), 1);
        assert_eq!(TransferStore::new(client).count_transfers().await?, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_failed_logs_and_blocks_are_recorded_once() -> Result<()> {
        let client = Client::init("sqlite::memory:").await?;
        let batch_store = BatchStore::new(client.clone());

        let failed_log = FailedLog {
            raw_log: r#"{"address":null}"#.to_string(),
            error_message: "missing address".to_string(),
        };
        let first = Batch {
            checkpoint: Checkpoint { block_number: 10 },
            transfers: vec![transfer(7, 0x01, 0, "1"), transfer(3, 0x02, 0, "1")],
            failed_logs: vec![failed_log.clone()],
            tokens: vec![],
        };
        let second = Batch {
            checkpoint: Checkpoint { block_number: 20 },
            transfers: vec![transfer(7, 0x03, 1, "1")],
            failed_logs: vec![failed_log.clone()],
            tokens: vec![],
        };

        assert_eq!(batch_store.commit(&first).await?.blocks, 2);
        let committed = batch_store.commit(&second).await?;
        assert_eq!(committed.blocks, 0);
        assert_eq!(committed.failed_logs, 0);

        assert_eq!(FailedLogStore::new(client.clone()).get_failed_logs().await?, vec![failed_log]);
        assert_eq!(BlockStore::new(client).get_block_numbers().await?, vec![3, 7]);

        Ok(())
    }

    #[tokio::test]
    async fn test_failed_commit_writes_nothing() -> Result<()> {
        let client = Client::init("sqlite::memory:").await?;
        let batch_store = BatchStore::new(client.clone());

        // tokens are written after transfers, so the transaction fails midway
        sqlx::query("DROP TABLE tokens").execute(client.pool()).await?;

        let batch = Batch {
            checkpoint: Checkpoint { block_number: 101 },
            transfers: vec![transfer(100, 0x01, 0, "500")],
            failed_logs: vec![],
            tokens: vec![token(0xEE, "tether", 6)],
        };

        assert!(batch_store.commit(&batch).await.is_err());

        assert_eq!(TransferStore::new(client.clone()).count_transfers().await?, 0);
        assert!(BlockStore::new(client.clone()).get_block_numbers().await?.is_empty());
        assert_eq!(CheckpointStore::new(client).get_last_checkpoint().await?, None);

        Ok(())
    }
}
