//! Implements a SQLite backed member directory store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{Group, GroupID, Member, MemberID},
    stores::MemberStore,
};

/// Stores members and their groups in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteMemberStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteMemberStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CreateTable for SQLiteMemberStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS savings_group (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE
            )",
            (),
        )?;

        connection.execute(
            "CREATE TABLE IF NOT EXISTS member (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                group_id INTEGER,
                FOREIGN KEY(group_id) REFERENCES savings_group(id) ON UPDATE CASCADE ON DELETE SET NULL
            )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for Member {
    type ReturnType = Self;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self, rusqlite::Error> {
        let id = MemberID::new(row.get(offset)?);
        let name = row.get(offset + 1)?;
        let group_id = row
            .get::<_, Option<i64>>(offset + 2)?
            .map(GroupID::new);

        Ok(Self { id, name, group_id })
    }
}

impl MapRow for Group {
    type ReturnType = Self;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self, rusqlite::Error> {
        let id = GroupID::new(row.get(offset)?);
        let name = row.get(offset + 1)?;

        Ok(Self { id, name })
    }
}

impl MemberStore for SQLiteMemberStore {
    fn create(&mut self, name: &str, group_id: Option<GroupID>) -> Result<Member, Error> {
        let member = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLock)?
            .prepare(
                "INSERT INTO member (name, group_id) VALUES (?1, ?2)
                 RETURNING id, name, group_id",
            )?
            .query_row(
                (name, group_id.map(|group_id| group_id.as_i64())),
                Member::map_row,
            )?;

        Ok(member)
    }

    fn get(&self, id: MemberID) -> Result<Member, Error> {
        let member = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLock)?
            .prepare("SELECT id, name, group_id FROM member WHERE id = :id")?
            .query_row(&[(":id", &id.as_i64())], Member::map_row)?;

        Ok(member)
    }

    fn get_all(&self) -> Result<Vec<Member>, Error> {
        self.connection
            .lock()
            .map_err(|_| Error::DatabaseLock)?
            .prepare("SELECT id, name, group_id FROM member ORDER BY id")?
            .query_map([], Member::map_row)?
            .map(|maybe_member| maybe_member.map_err(|error| error.into()))
            .collect()
    }

    fn get_by_group(&self, group_id: GroupID) -> Result<Vec<Member>, Error> {
        self.connection
            .lock()
            .map_err(|_| Error::DatabaseLock)?
            .prepare("SELECT id, name, group_id FROM member WHERE group_id = :group_id ORDER BY id")?
            .query_map(&[(":group_id", &group_id.as_i64())], Member::map_row)?
            .map(|maybe_member| maybe_member.map_err(|error| error.into()))
            .collect()
    }

    fn create_group(&mut self, name: &str) -> Result<Group, Error> {
        let group = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLock)?
            .prepare("INSERT INTO savings_group (name) VALUES (?1) RETURNING id, name")?
            .query_row([name], Group::map_row)?;

        Ok(group)
    }

    fn get_group(&self, id: GroupID) -> Result<Group, Error> {
        let group = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLock)?
            .prepare("SELECT id, name FROM savings_group WHERE id = :id")?
            .query_row(&[(":id", &id.as_i64())], Group::map_row)?;

        Ok(group)
    }
}
