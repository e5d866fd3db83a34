// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Domain fixtures shared across workspace tests: a login flow with a
//! dependent request chain and a pair of concurrent detail requests.

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub token: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherProfile {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherComments {
    pub teacher_id: u32,
    pub entries: Vec<String>,
}

pub fn credentials(username: &str, password: &str) -> Credentials {
    Credentials {
        username: username.to_string(),
        password: password.to_string(),
    }
}

pub fn token_for(credentials: &Credentials) -> Token {
    Token(format!("token-{}", credentials.username))
}

pub fn user_info_for(token: &Token) -> UserInfo {
    UserInfo {
        token: token.0.clone(),
        name: token.0.trim_start_matches("token-").to_string(),
    }
}

pub fn teacher(id: u32, name: &str) -> TeacherProfile {
    TeacherProfile {
        id,
        name: name.to_string(),
    }
}

pub fn comments(teacher_id: u32, entries: &[&str]) -> TeacherComments {
    TeacherComments {
        teacher_id,
        entries: entries.iter().map(|entry| entry.to_string()).collect(),
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.token)
    }
}
