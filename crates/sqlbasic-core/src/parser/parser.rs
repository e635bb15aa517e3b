//! SQL Parser implementation.

use super::error::ParseError;
use crate::ast::{
    AlterTableAddColumnStatement, Assignment, BinaryOp, ColumnDefinition, CreateIndexStatement,
    CreateTableStatement, DeleteStatement, DropIndexStatement, DropTableStatement, Expr,
    FromClause, FromItem, FunctionCall, InsertSource, InsertStatement, JoinClause, JoinKind,
    NamedTable, OrderByItem, OrderDirection, QualifiedName, SelectItem, SelectStatement,
    Statement, UnaryOp, UpdateStatement,
};
use crate::lexer::{Keyword, Lexer, Token, TokenKind};

/// SQL Parser.
///
/// Pulls tokens from the lexer on demand and keeps two of them in view:
/// `current` and the one after it, `peek`.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    peek: Token,
    /// Set while parsing a select-list item, where `t.*` is legal.
    allow_qualified_star: bool,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    ///
    /// # Errors
    ///
    /// Returns a lexical error if either of the first two tokens cannot
    /// be scanned.
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        let peek = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            peek,
            allow_qualified_star: false,
        })
    }

    /// Parses a single SQL statement, an optional `;`, and then requires
    /// end of input.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a valid SQL statement.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        tracing::debug!(start = %self.current.kind, "parsing statement");

        let statement = match self.current.kind {
            TokenKind::Keyword(Keyword::Select) => {
                Statement::Select(self.parse_select_statement()?)
            }
            TokenKind::Keyword(Keyword::Insert) => {
                Statement::Insert(self.parse_insert_statement()?)
            }
            TokenKind::Keyword(Keyword::Update) => {
                Statement::Update(self.parse_update_statement()?)
            }
            TokenKind::Keyword(Keyword::Delete) => {
                Statement::Delete(self.parse_delete_statement()?)
            }
            TokenKind::Keyword(Keyword::Create) => self.parse_create_statement()?,
            TokenKind::Keyword(Keyword::Drop) => self.parse_drop_statement()?,
            TokenKind::Keyword(Keyword::Alter) => {
                Statement::AlterTableAddColumn(self.parse_alter_statement()?)
            }
            _ => {
                return Err(ParseError::unexpected(
                    "SELECT, INSERT, UPDATE, DELETE, CREATE, DROP, or ALTER",
                    self.current.kind,
                    self.current.span,
                ));
            }
        };

        if self.check(TokenKind::Semicolon) {
            self.advance()?;
        }
        if !self.current.is_eof() {
            return Err(ParseError::unexpected(
                "end of input",
                self.current.kind,
                self.current.span,
            ));
        }

        Ok(statement)
    }

    /// Parses a SELECT statement. Stops after its last clause, so it
    /// serves both top-level queries and subqueries.
    fn parse_select_statement(&mut self) -> Result<SelectStatement, ParseError> {
        self.expect_keyword(Keyword::Select)?;

        // DISTINCT or ALL
        let distinct = if self.eat_keyword(Keyword::Distinct)? {
            true
        } else {
            self.eat_keyword(Keyword::All)?;
            false
        };

        let columns = self.parse_select_items()?;

        // FROM clause (optional for expressions like SELECT 1+1)
        let from = if self.eat_keyword(Keyword::From)? {
            Some(self.parse_from_clause()?)
        } else {
            None
        };

        let where_clause = if self.eat_keyword(Keyword::Where)? {
            Some(self.parse_expression()?)
        } else {
            None
        };

        let group_by = if self.eat_keyword(Keyword::Group)? {
            self.expect_keyword(Keyword::By)?;
            self.parse_expression_list()?
        } else {
            vec![]
        };

        let having = if self.eat_keyword(Keyword::Having)? {
            Some(self.parse_expression()?)
        } else {
            None
        };

        let order_by = if self.eat_keyword(Keyword::Order)? {
            self.expect_keyword(Keyword::By)?;
            self.parse_order_by_list()?
        } else {
            vec![]
        };

        // LIMIT n [OFFSET m] or LIMIT m, n
        let (limit, offset) = if self.eat_keyword(Keyword::Limit)? {
            let first = self.parse_row_count("LIMIT")?;
            if self.eat(TokenKind::Comma)? {
                (Some(self.parse_row_count("LIMIT")?), Some(first))
            } else if self.eat_keyword(Keyword::Offset)? {
                (Some(first), Some(self.parse_row_count("OFFSET")?))
            } else {
                (Some(first), None)
            }
        } else {
            (None, None)
        };

        Ok(SelectStatement {
            distinct,
            columns,
            from,
            where_clause,
            group_by,
            having,
            order_by,
            limit,
            offset,
        })
    }

    /// Parses the select list.
    fn parse_select_items(&mut self) -> Result<Vec<SelectItem>, ParseError> {
        let mut items = vec![];

        loop {
            if self.eat(TokenKind::Star)? {
                items.push(SelectItem::new(Expr::AllColumns { qualifier: None }));
            } else {
                let saved = core::mem::replace(&mut self.allow_qualified_star, true);
                let expr = self.parse_expression();
                self.allow_qualified_star = saved;
                let expr = expr?;

                let alias = self.parse_optional_alias()?;
                items.push(SelectItem { expr, alias });
            }

            if !self.eat(TokenKind::Comma)? {
                break;
            }
        }

        Ok(items)
    }

    /// Parses a FROM clause: one item followed by any number of joins.
    fn parse_from_clause(&mut self) -> Result<FromClause, ParseError> {
        let base = self.parse_from_item()?;

        let mut joins = vec![];
        while self.is_join_keyword() {
            let kind = self.parse_join_kind()?;
            let right = self.parse_from_item()?;
            self.expect_keyword(Keyword::On)?;
            let on = self.parse_expression()?;
            joins.push(JoinClause { kind, right, on });
        }

        Ok(FromClause { base, joins })
    }

    /// Parses a table or a parenthesized, aliased SELECT.
    fn parse_from_item(&mut self) -> Result<FromItem, ParseError> {
        if !self.check(TokenKind::LeftParen) {
            return Ok(FromItem::Named(self.parse_named_table()?));
        }

        self.advance()?;
        if !self.check_keyword(Keyword::Select) {
            return Err(ParseError::new(
                "Subquery in FROM must start with SELECT",
                self.current.kind,
                self.current.span,
            ));
        }
        let subquery = self.parse_select_statement()?;
        self.expect(TokenKind::RightParen)?;

        let Some(alias) = self.parse_optional_alias()? else {
            return Err(ParseError::new(
                "Alias is required for subquery in FROM",
                self.current.kind,
                self.current.span,
            ));
        };

        Ok(FromItem::Derived {
            subquery: Box::new(subquery),
            alias,
        })
    }

    /// Parses a dotted table name with an optional alias.
    fn parse_named_table(&mut self) -> Result<NamedTable, ParseError> {
        let name = self.parse_qualified_name()?;
        let alias = self.parse_optional_alias()?;
        Ok(NamedTable { name, alias })
    }

    /// Checks if current token is a join keyword.
    fn is_join_keyword(&self) -> bool {
        matches!(
            self.current.kind,
            TokenKind::Keyword(
                Keyword::Join | Keyword::Inner | Keyword::Left | Keyword::Right | Keyword::Full
            )
        )
    }

    /// Parses a join kind, up to and including `JOIN`.
    fn parse_join_kind(&mut self) -> Result<JoinKind, ParseError> {
        let kind = match self.current.kind {
            TokenKind::Keyword(Keyword::Join) => {
                self.advance()?;
                return Ok(JoinKind::Inner);
            }
            TokenKind::Keyword(Keyword::Inner) => {
                self.advance()?;
                self.expect_keyword(Keyword::Join)?;
                return Ok(JoinKind::Inner);
            }
            TokenKind::Keyword(Keyword::Left) => JoinKind::Left,
            TokenKind::Keyword(Keyword::Right) => JoinKind::Right,
            TokenKind::Keyword(Keyword::Full) => JoinKind::Full,
            _ => {
                return Err(ParseError::unexpected(
                    "JOIN keyword",
                    self.current.kind,
                    self.current.span,
                ));
            }
        };

        self.advance()?;
        self.eat_keyword(Keyword::Outer)?;
        self.expect_keyword(Keyword::Join)?;
        Ok(kind)
    }

    /// Parses an optional alias: `AS name` or a bare identifier.
    fn parse_optional_alias(&mut self) -> Result<Option<String>, ParseError> {
        if self.eat_keyword(Keyword::As)? {
            Ok(Some(self.expect_identifier()?))
        } else if self.check(TokenKind::Identifier) {
            Ok(Some(self.expect_identifier()?))
        } else {
            Ok(None)
        }
    }

    /// Parses an INSERT statement.
    fn parse_insert_statement(&mut self) -> Result<InsertStatement, ParseError> {
        self.expect_keyword(Keyword::Insert)?;
        self.expect_keyword(Keyword::Into)?;

        let table = self.parse_named_table()?;

        let columns = if self.eat(TokenKind::LeftParen)? {
            let cols = self.parse_identifier_list()?;
            self.expect(TokenKind::RightParen)?;
            cols
        } else {
            vec![]
        };

        let source = if self.eat_keyword(Keyword::Values)? {
            let mut rows = vec![];
            loop {
                self.expect(TokenKind::LeftParen)?;
                let row = if self.check(TokenKind::RightParen) {
                    vec![]
                } else {
                    self.parse_expression_list()?
                };
                self.expect(TokenKind::RightParen)?;
                rows.push(row);

                if !self.eat(TokenKind::Comma)? {
                    break;
                }
            }
            InsertSource::Values(rows)
        } else if self.check_keyword(Keyword::Select) {
            InsertSource::Query(Box::new(self.parse_select_statement()?))
        } else {
            return Err(ParseError::unexpected(
                "VALUES or SELECT",
                self.current.kind,
                self.current.span,
            ));
        };

        Ok(InsertStatement {
            table,
            columns,
            source,
        })
    }

    /// Parses an UPDATE statement.
    fn parse_update_statement(&mut self) -> Result<UpdateStatement, ParseError> {
        self.expect_keyword(Keyword::Update)?;
        let table = self.parse_named_table()?;
        self.expect_keyword(Keyword::Set)?;

        let mut assignments = vec![];
        loop {
            let target = self.parse_qualified_name()?;
            self.expect(TokenKind::Eq)?;
            let value = self.parse_expression()?;
            assignments.push(Assignment { target, value });

            if !self.eat(TokenKind::Comma)? {
                break;
            }
        }

        let where_clause = if self.eat_keyword(Keyword::Where)? {
            Some(self.parse_expression()?)
        } else {
            None
        };

        Ok(UpdateStatement {
            table,
            assignments,
            where_clause,
        })
    }

    /// Parses a DELETE statement. `FROM` is optional.
    fn parse_delete_statement(&mut self) -> Result<DeleteStatement, ParseError> {
        self.expect_keyword(Keyword::Delete)?;
        self.eat_keyword(Keyword::From)?;

        let table = self.parse_named_table()?;

        let where_clause = if self.eat_keyword(Keyword::Where)? {
            Some(self.parse_expression()?)
        } else {
            None
        };

        Ok(DeleteStatement {
            table,
            where_clause,
        })
    }

    /// Parses CREATE TABLE or CREATE INDEX.
    fn parse_create_statement(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Create)?;

        if self.eat_keyword(Keyword::Table)? {
            let name = self.parse_qualified_name()?;
            self.expect(TokenKind::LeftParen)?;

            let mut columns = vec![];
            loop {
                columns.push(self.parse_column_definition()?);
                if !self.eat(TokenKind::Comma)? {
                    break;
                }
            }
            self.expect(TokenKind::RightParen)?;

            Ok(Statement::CreateTable(CreateTableStatement { name, columns }))
        } else if self.eat_keyword(Keyword::Index)? {
            let name = self.parse_qualified_name()?;
            self.expect_keyword(Keyword::On)?;
            let table = self.parse_qualified_name()?;
            self.expect(TokenKind::LeftParen)?;
            let columns = self.parse_identifier_list()?;
            self.expect(TokenKind::RightParen)?;

            Ok(Statement::CreateIndex(CreateIndexStatement {
                name,
                table,
                columns,
            }))
        } else {
            Err(ParseError::unexpected(
                "TABLE or INDEX",
                self.current.kind,
                self.current.span,
            ))
        }
    }

    /// Parses DROP TABLE or DROP INDEX.
    fn parse_drop_statement(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Drop)?;

        if self.eat_keyword(Keyword::Table)? {
            let name = self.parse_qualified_name()?;
            Ok(Statement::DropTable(DropTableStatement { name }))
        } else if self.eat_keyword(Keyword::Index)? {
            let name = self.parse_qualified_name()?;
            let table = if self.eat_keyword(Keyword::On)? {
                Some(self.parse_qualified_name()?)
            } else {
                None
            };
            Ok(Statement::DropIndex(DropIndexStatement { name, table }))
        } else {
            Err(ParseError::unexpected(
                "TABLE or INDEX",
                self.current.kind,
                self.current.span,
            ))
        }
    }

    /// Parses `ALTER TABLE t ADD [COLUMN] name type`.
    fn parse_alter_statement(&mut self) -> Result<AlterTableAddColumnStatement, ParseError> {
        self.expect_keyword(Keyword::Alter)?;
        self.expect_keyword(Keyword::Table)?;
        let table = self.parse_qualified_name()?;
        self.expect_keyword(Keyword::Add)?;
        self.eat_keyword(Keyword::Column)?;
        let column = self.parse_column_definition()?;

        Ok(AlterTableAddColumnStatement { table, column })
    }

    /// Parses a column name followed by its raw type text.
    fn parse_column_definition(&mut self) -> Result<ColumnDefinition, ParseError> {
        let name = self.expect_identifier()?;
        let data_type = self.parse_type_text()?;
        Ok(ColumnDefinition { name, data_type })
    }

    /// Captures a column type as source text.
    ///
    /// Runs until a top-level `,` or `)`, a `;`, or end of input; the
    /// caller decides which of those may legally follow. Lexemes are
    /// joined with single spaces, except that none goes before `(`, `)`
    /// or `,` and none after `(`, so `DECIMAL (10,2)` becomes
    /// `DECIMAL(10, 2)`.
    fn parse_type_text(&mut self) -> Result<String, ParseError> {
        let mut text = String::new();
        let mut depth = 0usize;
        let mut needs_space = false;

        loop {
            let kind = self.current.kind;
            match kind {
                TokenKind::Eof | TokenKind::Semicolon => break,
                TokenKind::Comma | TokenKind::RightParen if depth == 0 => break,
                _ => {}
            }

            if needs_space
                && !matches!(
                    kind,
                    TokenKind::Comma | TokenKind::LeftParen | TokenKind::RightParen
                )
            {
                text.push(' ');
            }
            text.push_str(self.current.span.slice(self.lexer.source()));

            match kind {
                TokenKind::LeftParen => {
                    depth += 1;
                    needs_space = false;
                }
                TokenKind::RightParen => {
                    depth -= 1;
                    needs_space = true;
                }
                _ => needs_space = true,
            }

            self.advance()?;
        }

        Ok(text)
    }

    /// Parses an ORDER BY list.
    fn parse_order_by_list(&mut self) -> Result<Vec<OrderByItem>, ParseError> {
        let mut items = vec![];

        loop {
            let expr = self.parse_expression()?;

            let direction = if self.eat_keyword(Keyword::Desc)? {
                OrderDirection::Desc
            } else {
                self.eat_keyword(Keyword::Asc)?;
                OrderDirection::Asc
            };

            items.push(OrderByItem { expr, direction });

            if !self.eat(TokenKind::Comma)? {
                break;
            }
        }

        Ok(items)
    }

    /// Parses a LIMIT or OFFSET operand: a non-negative integer literal.
    fn parse_row_count(&mut self, clause: &str) -> Result<u64, ParseError> {
        if !self.check(TokenKind::Number) || self.current.text.contains('.') {
            return Err(ParseError::new(
                format!("{clause} requires a non-negative integer"),
                self.current.kind,
                self.current.span,
            ));
        }

        let token = self.advance()?;
        token.text.parse().map_err(|_| {
            ParseError::new("Integer literal out of range", token.kind, token.span)
        })
    }

    // --- Expressions ---
    //
    // Lowest to highest: OR, AND, prefix NOT, comparison (including
    // LIKE, IN and IS), additive, multiplicative, prefix -/+, primary.

    /// Parses an expression.
    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;
        while self.eat_keyword(Keyword::Or)? {
            let right = self.parse_and()?;
            left = left.or(right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_not()?;
        while self.eat_keyword(Keyword::And)? {
            let right = self.parse_not()?;
            left = left.and(right);
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Expr, ParseError> {
        if self.eat_keyword(Keyword::Not)? {
            let operand = self.parse_not()?;
            return Ok(Expr::unary(UnaryOp::Not, operand));
        }
        self.parse_comparison()
    }

    /// Parses a left-associative chain of comparison-level operators.
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;

        loop {
            if let Some(op) = comparison_op(self.current.kind) {
                self.advance()?;
                let right = self.parse_additive()?;
                left = left.binary(op, right);
                continue;
            }

            // NOT here only belongs to us when LIKE or IN follows it.
            let negated = self.check_keyword(Keyword::Not)
                && matches!(
                    self.peek.kind,
                    TokenKind::Keyword(Keyword::Like | Keyword::In)
                );
            if negated {
                self.advance()?;
            }

            if self.eat_keyword(Keyword::Like)? {
                let op = if negated {
                    BinaryOp::NotLike
                } else {
                    BinaryOp::Like
                };
                let right = self.parse_additive()?;
                left = left.binary(op, right);
            } else if self.eat_keyword(Keyword::In)? {
                let list = self.parse_in_list()?;
                left = Expr::In {
                    expr: Box::new(left),
                    list,
                    negated,
                };
            } else if self.eat_keyword(Keyword::Is)? {
                let op = if self.eat_keyword(Keyword::Not)? {
                    BinaryOp::IsNot
                } else {
                    BinaryOp::Is
                };
                self.expect_keyword(Keyword::Null)?;
                left = left.binary(op, Expr::null());
            } else {
                return Ok(left);
            }
        }
    }

    /// Parses the parenthesized, possibly empty candidate list of IN.
    fn parse_in_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        if !self.check(TokenKind::LeftParen) {
            return Err(ParseError::new(
                "IN requires a parenthesized list",
                self.current.kind,
                self.current.span,
            ));
        }
        self.advance()?;

        let list = if self.check(TokenKind::RightParen) {
            vec![]
        } else {
            self.parse_expression_list()?
        };
        self.expect(TokenKind::RightParen)?;
        Ok(list)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.current.kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => return Ok(left),
            };
            self.advance()?;
            let right = self.parse_multiplicative()?;
            left = left.binary(op, right);
        }
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.current.kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Mod,
                _ => return Ok(left),
            };
            self.advance()?;
            let right = self.parse_unary()?;
            left = left.binary(op, right);
        }
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.current.kind {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Plus => UnaryOp::Plus,
            _ => return self.parse_primary(),
        };
        self.advance()?;
        let operand = self.parse_unary()?;
        Ok(Expr::unary(op, operand))
    }

    /// Parses a primary expression.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.current.kind {
            TokenKind::LeftParen => {
                self.advance()?;
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RightParen)?;
                Ok(expr)
            }
            TokenKind::Number => {
                let token = self.advance()?;
                parse_number(&token)
            }
            TokenKind::String => {
                let token = self.advance()?;
                Ok(Expr::string(token.text))
            }
            TokenKind::Keyword(Keyword::True) => {
                self.advance()?;
                Ok(Expr::boolean(true))
            }
            TokenKind::Keyword(Keyword::False) => {
                self.advance()?;
                Ok(Expr::boolean(false))
            }
            TokenKind::Keyword(Keyword::Null) => {
                self.advance()?;
                Ok(Expr::null())
            }
            TokenKind::Identifier => self.parse_identifier_expression(),
            _ => Err(ParseError::unexpected(
                "expression",
                self.current.kind,
                self.current.span,
            )),
        }
    }

    /// Parses an identifier chain, a qualified star, or a function call.
    fn parse_identifier_expression(&mut self) -> Result<Expr, ParseError> {
        let mut parts = vec![self.expect_identifier()?];

        while self.eat(TokenKind::Dot)? {
            if self.allow_qualified_star && self.check(TokenKind::Star) {
                self.advance()?;
                return Ok(Expr::AllColumns {
                    qualifier: Some(QualifiedName { parts }),
                });
            }
            parts.push(self.expect_identifier()?);
        }

        let name = QualifiedName { parts };
        if !self.eat(TokenKind::LeftParen)? {
            return Ok(Expr::Identifier(name));
        }

        let args = if self.check(TokenKind::Star) && self.peek.kind == TokenKind::RightParen {
            self.advance()?;
            vec![Expr::AllColumns { qualifier: None }]
        } else if self.check(TokenKind::RightParen) {
            vec![]
        } else {
            self.parse_expression_list()?
        };
        self.expect(TokenKind::RightParen)?;

        Ok(Expr::Call(FunctionCall { name, args }))
    }

    /// Parses a comma-separated list of expressions.
    fn parse_expression_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = vec![];
        loop {
            exprs.push(self.parse_expression()?);
            if !self.eat(TokenKind::Comma)? {
                break;
            }
        }
        Ok(exprs)
    }

    /// Parses a comma-separated list of identifiers.
    fn parse_identifier_list(&mut self) -> Result<Vec<String>, ParseError> {
        let mut idents = vec![];
        loop {
            idents.push(self.expect_identifier()?);
            if !self.eat(TokenKind::Comma)? {
                break;
            }
        }
        Ok(idents)
    }

    /// Parses `ident(.ident)*`.
    fn parse_qualified_name(&mut self) -> Result<QualifiedName, ParseError> {
        let mut parts = vec![self.expect_identifier()?];
        while self.eat(TokenKind::Dot)? {
            parts.push(self.expect_identifier()?);
        }
        Ok(QualifiedName { parts })
    }

    // --- Helper methods ---

    /// Advances to the next token and returns the one just consumed.
    fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.lexer.next_token()?;
        let peek = core::mem::replace(&mut self.peek, next);
        Ok(core::mem::replace(&mut self.current, peek))
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Checks if the current token is the given keyword.
    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current.kind.is_keyword(keyword)
    }

    /// Consumes the current token if it matches the given kind.
    fn eat(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes the current token if it is the given keyword.
    fn eat_keyword(&mut self, keyword: Keyword) -> Result<bool, ParseError> {
        self.eat(TokenKind::Keyword(keyword))
    }

    /// Expects the current token to be the given kind.
    fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.eat(kind)? {
            Ok(())
        } else {
            Err(ParseError::unexpected(
                &kind.to_string(),
                self.current.kind,
                self.current.span,
            ))
        }
    }

    /// Expects the current token to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if self.eat_keyword(keyword)? {
            Ok(())
        } else {
            Err(ParseError::unexpected(
                keyword.as_str(),
                self.current.kind,
                self.current.span,
            ))
        }
    }

    /// Expects and returns an identifier.
    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if self.check(TokenKind::Identifier) {
            Ok(self.advance()?.text)
        } else {
            Err(ParseError::unexpected(
                "identifier",
                self.current.kind,
                self.current.span,
            ))
        }
    }
}

/// Maps a token to the plain comparison operator it spells.
const fn comparison_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Eq => Some(BinaryOp::Eq),
        TokenKind::NotEq => Some(BinaryOp::NotEq),
        TokenKind::Lt => Some(BinaryOp::Lt),
        TokenKind::LtEq => Some(BinaryOp::LtEq),
        TokenKind::Gt => Some(BinaryOp::Gt),
        TokenKind::GtEq => Some(BinaryOp::GtEq),
        _ => None,
    }
}

/// Converts a number token into an integer or decimal literal.
fn parse_number(token: &Token) -> Result<Expr, ParseError> {
    if token.text.contains('.') {
        match token.text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Expr::float(value)),
            _ => Err(ParseError::new(
                "Numeric literal out of range",
                token.kind,
                token.span,
            )),
        }
    } else {
        token.text.parse::<i64>().map(Expr::integer).map_err(|_| {
            ParseError::new("Integer literal out of range", token.kind, token.span)
        })
    }
}
