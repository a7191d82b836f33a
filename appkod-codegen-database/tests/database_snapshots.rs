//! Snapshot tests for schema and model generation.

use appkod_blueprint::Blueprint;
use appkod_codegen::{ArtifactGenerator, GenerateContext, generation::OutputLayout};
use appkod_codegen_database::DatabaseGenerator;
use appkod_core::TypeRegistry;

/// Generate both artifacts and return `(schema, models)`.
fn generate(yaml: &str) -> (String, String) {
    let blueprint = Blueprint::from_yaml(yaml).expect("Failed to parse blueprint");
    let types = TypeRegistry::default();
    let layout = OutputLayout::default();
    let ctx = GenerateContext::new(&blueprint, &types, &layout);

    let artifacts = DatabaseGenerator.generate(&ctx);
    assert_eq!(artifacts.len(), 2);
    assert_eq!(artifacts[0].path, "prisma/schema.prisma");
    assert_eq!(artifacts[1].path, "api/models.py");
    (artifacts[0].content.clone(), artifacts[1].content.clone())
}

const CUSTOMERS: &str = r#"
database:
  tables:
    - name: customers
      description: People we sell to
      softDelete: true
      fields:
        - { name: id, type: uuid, primary: true }
        - { name: name, type: string, required: true }
        - { name: email, type: email, unique: true }
"#;

#[test]
fn test_prisma_schema() {
    let (schema, _) = generate(CUSTOMERS);
    insta::assert_snapshot!(schema, @r#"
    // Auto-generated Prisma schema from Blueprint
    // DO NOT EDIT - regenerate from Blueprint

    generator client {
      provider = "prisma-client-js"
    }

    datasource db {
      provider = "postgresql"
      url      = env("DATABASE_URL")
    }

    /// People we sell to
    model Customers {
      id String @id @default(uuid())
      name String
      email String? @unique
      createdAt DateTime @default(now()) @map("created_at")
      updatedAt DateTime @updatedAt @map("updated_at")
      deletedAt DateTime? @map("deleted_at")
      tenantId String @map("tenant_id")

      @@index([tenantId])
      @@map("customers")
    }
    "#);
}

#[test]
fn test_sqlmodel_models() {
    let (_, models) = generate(CUSTOMERS);
    insta::assert_snapshot!(models, @r#"
    """Auto-generated SQLModel models from Blueprint"""
    # DO NOT EDIT - regenerate from Blueprint

    from datetime import datetime
    from typing import Optional
    from uuid import UUID, uuid4

    from sqlmodel import Field, SQLModel


    class Customers(SQLModel, table=True):
        """People we sell to"""
        __tablename__ = "customers"

        id: UUID = Field(default_factory=uuid4, primary_key=True)
        name: str
        email: Optional[str] = Field(unique=True, default=None)
        created_at: datetime = Field(default_factory=datetime.utcnow)
        updated_at: datetime = Field(default_factory=datetime.utcnow)
        deleted_at: Optional[datetime] = None
        tenant_id: UUID = Field(index=True)
    "#);
}

#[test]
fn test_tenant_scoping_is_uniform() {
    let (schema, models) = generate(
        r#"
        database:
          tables:
            - { name: invoices, fields: [ { name: id, type: integer, primary: true } ] }
        "#,
    );
    assert!(schema.contains("tenantId String @map(\"tenant_id\")"));
    assert!(schema.contains("@@index([tenantId])"));
    assert!(models.contains("tenant_id: UUID = Field(index=True)"));

    let (schema, models) = generate(
        r#"
        database:
          tables:
            - name: invoices
              tenantScoped: false
              fields: [ { name: id, type: integer, primary: true } ]
        "#,
    );
    assert!(!schema.contains("tenantId"));
    assert!(!models.contains("tenant_id"));
}

#[test]
fn test_primary_key_strategies_agree() {
    let (schema, models) = generate(
        r#"
        database:
          tables:
            - { name: users, fields: [ { name: id, type: uuid, primary: true } ] }
            - { name: counters, fields: [ { name: id, type: integer, primary: true } ] }
        "#,
    );

    assert!(schema.contains("id String @id @default(uuid())"));
    assert!(models.contains("id: UUID = Field(default_factory=uuid4, primary_key=True)"));
    assert!(schema.contains("id Int @id @default(autoincrement())"));
    assert!(models.contains("sa_column_kwargs={\"autoincrement\": True}"));
}

#[test]
fn test_field_order_and_table_names() {
    let (schema, models) = generate(
        r#"
        database:
          tables:
            - name: orderItems
              timestamps: false
              tenantScoped: false
              fields:
                - { name: quantity, type: integer, required: true }
                - { name: sku, type: string, required: true }
        "#,
    );

    assert!(schema.contains("model Orderitems {"));
    assert!(schema.contains("@@map(\"order_items\")"));
    assert!(models.contains("class Orderitems(SQLModel, table=True):"));
    assert!(models.contains("__tablename__ = \"order_items\""));

    let quantity = schema.find("quantity Int").unwrap();
    let sku = schema.find("sku String").unwrap();
    assert!(quantity < sku);
    assert!(!schema.contains("createdAt"));
}

#[test]
fn test_multiline_descriptions_stay_commented() {
    let (schema, models) = generate(
        r#"
database:
  tables:
    - name: customers
      description: "People we sell to\nDROP TABLE customers"
      fields:
        - { name: id, type: uuid, primary: true }
        - { name: phone, type: phone, description: "Mobile only\nimport os" }
"#,
    );

    assert!(schema.contains("/// People we sell to\n/// DROP TABLE customers\nmodel Customers {"));
    assert!(schema.contains("\n  /// Mobile only\n  /// import os\n  phone "));
    assert!(!schema.lines().any(|line| line.starts_with("DROP")));

    assert!(models.contains(
        "class Customers(SQLModel, table=True):\n    \"\"\"People we sell to\n    DROP TABLE customers\n    \"\"\"\n"
    ));
    assert!(models.contains("\n    # Mobile only\n    # import os\n    phone: "));
    assert!(!models.lines().any(|line| line == "import os"));
}

#[test]
fn test_generation_is_idempotent() {
    assert_eq!(generate(CUSTOMERS), generate(CUSTOMERS));
}
